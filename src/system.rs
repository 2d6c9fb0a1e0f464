// fake host identity behind uname / hostnamectl / neofetch
// nothing here is measured, derived values are rolled once at startup

use chrono::{DateTime, Local, TimeDelta};
use rand::{Rng, RngCore};
use regex::Regex;
use uuid::Builder;

use crate::config::TerminalConfig;
use crate::format::gauge;

pub const ORANGE: &str = "\x1b[38;2;233;84;32m";
pub const TEAL: &str = "\x1b[38;2;23;184;144m";
pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

const MEMORY_SIZES_MIB: [u64; 3] = [8192, 16384, 32768];
const CORE_COUNTS: [u32; 4] = [4, 8, 12, 16];
const MAX_UPTIME_SECS: u64 = 86_400 * 30;

// show/hide cursor, wraparound toggles, cursor moves, save/restore, erase
const CURSOR_CONTROL: &str = r"\x1b\[\?\d+[hl]|\x1b\[\d*(?:;\d*)?[A-HJKsu]";

const LOGO: [&str; 8] = [
    "         _nnnn_        ",
    "        dGGGGMMb       ",
    "       @p~qp~~qMb      ",
    "       M|@||@) M|      ",
    "       @,----.JM|      ",
    "      JS^\\__/  qKL     ",
    "     dZP        qKRb   ",
    "    dZP          qKKb  ",
];

pub struct SystemInfo {
    pub hostname: String,
    pub username: String,
    pub platform: String,
    pub os: String,
    pub arch: String,
    pub kernel: String,
    pub uptime_secs: u64,
    pub booted_at: DateTime<Local>,
    pub cpu_cores: u32,
    pub mem_total_mib: u64,
    pub mem_used_mib: u64,
    pub packages: u32,
    raw_fetch: Option<String>,
}

impl SystemInfo {
    pub fn new(config: &TerminalConfig, rng: &mut dyn RngCore) -> Self {
        let uptime_secs = rng.gen_range(0..MAX_UPTIME_SECS);
        let mem_total_mib = MEMORY_SIZES_MIB[rng.gen_range(0..MEMORY_SIZES_MIB.len())];
        let used_ratio: f64 = rng.gen_range(0.2..0.7);
        let booted_at = Local::now() - TimeDelta::seconds(uptime_secs as i64);

        Self {
            hostname: config.hostname.clone(),
            username: config.username.clone(),
            platform: config.platform.clone(),
            os: config
                .platform
                .split_whitespace()
                .next()
                .unwrap_or("Linux")
                .to_string(),
            arch: config.arch.clone(),
            kernel: config.kernel.clone(),
            uptime_secs,
            booted_at,
            cpu_cores: CORE_COUNTS[rng.gen_range(0..CORE_COUNTS.len())],
            mem_total_mib,
            mem_used_mib: (mem_total_mib as f64 * used_ratio) as u64,
            packages: rng.gen_range(1200..2400),
            raw_fetch: None,
        }
    }

    /// Store a prefetched neofetch capture. Cursor-control sequences are
    /// dropped, colors are kept.
    pub fn set_raw_fetch(&mut self, blob: &str) {
        self.raw_fetch = Some(strip_cursor_controls(blob));
    }

    pub fn has_raw_fetch(&self) -> bool {
        self.raw_fetch.is_some()
    }

    pub fn uptime(&self) -> String {
        let days = self.uptime_secs / 86_400;
        let hours = (self.uptime_secs % 86_400) / 3_600;
        let mins = (self.uptime_secs % 3_600) / 60;
        format!("{}d {}h {}m", days, hours, mins)
    }

    /// Compact summary with a small piece of ascii art, shown in the banner.
    pub fn summary(&self) -> String {
        let rule = "─".repeat(self.username.chars().count() + self.hostname.chars().count() + 1);
        format!(
            "           _
         / \\
        /   \\               {user}@{host}
       /     \\              {rule}
      /_______\\             OS: {platform}
                            Kernel: {kernel}
                            Architecture: {arch}
                            Uptime: {uptime}",
            user = self.username,
            host = self.hostname,
            rule = rule,
            platform = self.platform,
            kernel = self.kernel,
            arch = self.arch,
            uptime = self.uptime(),
        )
    }

    /// Detailed neofetch-style report with colored labels and a memory gauge.
    pub fn report(&self) -> String {
        let mem_pct = self.mem_used_mib as f64 / self.mem_total_mib as f64 * 100.0;
        let title = format!(
            "{o}{b}{u}{r}@{o}{b}{h}{r}",
            o = ORANGE,
            b = BOLD,
            r = RESET,
            u = self.username,
            h = self.hostname
        );
        let fields = [
            title,
            "-".repeat(self.username.chars().count() + self.hostname.chars().count() + 1),
            label("OS", &format!("{} {}", self.platform, self.arch)),
            label("Host", "Terminal CV (virtual)"),
            label("Kernel", &self.kernel),
            label("Uptime", &self.uptime()),
            label("Packages", &format!("{} (dpkg)", self.packages)),
            label("Shell", "cv-sh 0.1.0"),
            label("CPU", &format!("Virtual CPU ({}) @ 2.40GHz", self.cpu_cores)),
            label(
                "Memory",
                &format!(
                    "{}MiB / {}MiB {} {:.0}%",
                    self.mem_used_mib,
                    self.mem_total_mib,
                    gauge(mem_pct, 100.0, 10),
                    mem_pct
                ),
            ),
            label("Up since", &self.booted_at.format("%Y-%m-%d %H:%M").to_string()),
        ];

        let rows = LOGO.len().max(fields.len());
        let blank = " ".repeat(LOGO[0].chars().count());
        let mut lines = Vec::with_capacity(rows);
        for i in 0..rows {
            let art = LOGO.get(i).copied().unwrap_or(blank.as_str());
            let field = fields.get(i).map(String::as_str).unwrap_or("");
            lines.push(format!("{}{}{}{}", TEAL, art, RESET, field).trim_end().to_string());
        }
        lines.join("\n")
    }

    /// Raw capture when one was prefetched, synthesized report otherwise.
    pub fn fetch(&self) -> String {
        match &self.raw_fetch {
            Some(raw) => raw.clone(),
            None => self.report(),
        }
    }

    pub fn uname(&self) -> String {
        format!(
            "Linux {} {} #1 SMP Ubuntu/Canonical\n{} {}",
            self.hostname, self.kernel, self.arch, self.platform
        )
    }

    /// Boot id is re-rolled on every call.
    pub fn hostnamectl(&self, rng: &mut dyn RngCore) -> String {
        let mut bytes = [0u8; 16];
        rng.fill_bytes(&mut bytes);
        let boot_id = Builder::from_random_bytes(bytes).into_uuid();
        format!(
            " Static hostname: {}
       Icon name: computer-laptop
         Chassis: laptop
      Machine ID: cv-terminal-wasm
         Boot ID: {}
  Virtualization: wasm
Operating System: {}
          Kernel: Linux {}
    Architecture: {}",
            self.hostname,
            boot_id.simple(),
            self.platform,
            self.kernel,
            self.arch
        )
    }
}

fn label(name: &str, value: &str) -> String {
    format!("{}{}{}{}: {}", ORANGE, BOLD, name, RESET, value)
}

pub fn strip_cursor_controls(text: &str) -> String {
    match Regex::new(CURSOR_CONTROL) {
        Ok(re) => re.replace_all(text, "").into_owned(),
        Err(_) => text.to_string(),
    }
}
