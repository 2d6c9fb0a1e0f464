// simulated process table for htop/btop
// values random-walk on every tick, nothing is measured

use rand::{Rng, RngCore};

use crate::format::gauge;

const ROSTER: [&str; 15] = [
    "init",
    "kthreadd",
    "rcu_gp",
    "rcu_par_gp",
    "kworker/0:0",
    "systemd",
    "journald",
    "sshd",
    "bash",
    "cv-terminal",
    "node",
    "npm",
    "git",
    "chrome",
    "firefox",
];

const FIRST_PID: u32 = 100;
const MAX_CPU: f64 = 40.0;
const MAX_MEM: f64 = 20.0;
const CPU_STEP: f64 = 5.0;
const MEM_STEP: f64 = 3.0;
const VISIBLE_ROWS: usize = 10;
const ROW_GAUGE_WIDTH: usize = 10;
const HEADER_GAUGE_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub user: String,
    pub name: String,
    pub cpu: f64,
    pub mem: f64,
}

#[derive(Debug, Clone)]
pub struct ProcessTable {
    processes: Vec<ProcessRecord>,
}

impl ProcessTable {
    pub fn new(user: &str, rng: &mut dyn RngCore) -> Self {
        let processes = ROSTER
            .iter()
            .enumerate()
            .map(|(i, name)| ProcessRecord {
                pid: FIRST_PID + i as u32,
                user: user.to_string(),
                name: name.to_string(),
                cpu: rng.gen::<f64>() * 20.0,
                mem: rng.gen::<f64>() * 15.0,
            })
            .collect();
        Self { processes }
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    /// One bounded random-walk step for every process, then re-sort by CPU.
    pub fn tick(&mut self, rng: &mut dyn RngCore) {
        for p in &mut self.processes {
            p.cpu = (p.cpu + (rng.gen::<f64>() - 0.5) * CPU_STEP).clamp(0.0, MAX_CPU);
            p.mem = (p.mem + (rng.gen::<f64>() - 0.5) * MEM_STEP).clamp(0.0, MAX_MEM);
        }
        self.sort();
    }

    fn sort(&mut self) {
        self.processes
            .sort_by(|a, b| b.cpu.partial_cmp(&a.cpu).unwrap_or(std::cmp::Ordering::Equal));
    }

    pub fn total_cpu(&self) -> f64 {
        self.processes.iter().map(|p| p.cpu).sum::<f64>().min(100.0)
    }

    pub fn total_mem(&self) -> f64 {
        self.processes.iter().map(|p| p.mem).sum::<f64>().min(100.0)
    }

    /// Header with aggregate gauges followed by the busiest processes.
    pub fn snapshot(&mut self) -> String {
        self.sort();
        let cpu = self.total_cpu();
        let mem = self.total_mem();

        let mut out = format!(
            "Tasks: {} total   Load average: {:.2}, {:.2}, {:.2}\n",
            self.processes.len(),
            cpu / 10.0,
            cpu / 15.0,
            cpu / 20.0
        );
        out.push_str(&format!("CPU  {} {:5.1}%\n", gauge(cpu, 100.0, HEADER_GAUGE_WIDTH), cpu));
        out.push_str(&format!("Mem  {} {:5.1}%\n\n", gauge(mem, 100.0, HEADER_GAUGE_WIDTH), mem));
        out.push_str("  PID USER     CPU%  MEM%  CPU          COMMAND\n");
        for p in self.processes.iter().take(VISIBLE_ROWS) {
            out.push_str(&format!(
                "{:>5} {:<8} {:>5.1} {:>5.1}  {} {}\n",
                p.pid,
                p.user,
                p.cpu,
                p.mem,
                gauge(p.cpu, MAX_CPU, ROW_GAUGE_WIDTH),
                p.name
            ));
        }
        out.pop();
        out
    }
}
