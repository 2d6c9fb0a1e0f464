// static cv data and the filesystem built from it

use crate::vfs::VirtualFileSystem;

pub const WHOAMI: &str =
    "Sascha — Enterprise Systems Engineer (Backup, Virtualization & Automation) at Veeam.";

pub const EXPERIENCE: &str = "11/2024 – Present
Enterprise Systems Engineer – Customer Success
Veeam Software Group, München
- Led Backup Configuration Review in Enterprise Environments
  (AHV, vSphere, Hyper-V, Proxmox, AWS, Azure)
- Security Hardening, Zoning (AD placement, Protocol Review)
- Solution Design for large-scale backup environments
- Driving product adoption to increase customer retention (99%+ renewal rate)
- Identified Cross- and Upsell opportunities (+5M $ TCV, +1M $ ARR)

10/2021 – 11/2024
Team Lead Backup & Storage – Dedalus IT Group
Dedalus HealthCare GmbH, Bonn
- Implementation & Operations Dedalus Private Cloud (170+ ESXi Hosts)
- Design & Operations Backup Infrastructure (5000+ VMs, 1PB+)
- Design & Operations Storage Infrastructure (PureStorage, NetApp, Dell ECS)
- Linux SME: Configuration Management (RHEL, Ubuntu, OEL, Rocky)

09/2018 – 10/2021
Systems Engineer – Datacenter Solutions
WBS IT-Service GmbH, Leipzig
- Infrastructure Operations: Virtualization, Backup, Storage
- Pre-Sales & Architecture of Backup Environments
- Automation: Powershell and Python

05/2016 – 08/2018
Consultant
mobileBlox GmbH, Leipzig
- Pre-Sales Product Presentations (CRM)
- On-site training and process optimization
- 2nd Level Support

02/2014 – 07/2014
Jr. Sales and Account Manager; Internship
Wize Commerce, Günstiger.de, Hamburg";

pub const EDUCATION: &str = "10/2018 – 09/2021
Dual Study Program in Computer Science
Staatliche Studienakademie Leipzig
Final Grade: 1.8
Thesis: Planung einer Bereitstellung eines Enterprise Container
         Clusters auf Basis von VMware Tanzu
Degree: Bachelor of Science";

pub const SKILLS: &str = "Virtualization & Cloud:
  vSphere, Proxmox, AWS, Azure, AHV

Automation & IaC:
  Linux (RHEL/Ubuntu), Saltstack, Ansible, Terraform, Packer
  Python, Bash, PowerShell

Containers:
  Docker, Kubernetes

Identity & Security:
  SAML, OIDC, Azure AD, Authentik

CSM Tools:
  Gainsight, Salesforce, ServiceNow

Certifications:
  VMCE & VMCA 2025
  AWS Certified Solutions Architect – Associate
  Commvault Certified Professional
  ITIL 4 Foundation";

pub const CONTACT: &str = "Email:   sascha@srgls.de
GitHub:  https://github.com/sorglos123/";

const ABOUT_BIO: &str = "I’m an Enterprise Systems Engineer specializing in backup & restore,
large-scale virtualization (vSphere, Proxmox), and automation
(Ansible, Salt, Terraform). I design and operate resilient backup
infrastructures and drive adoption of enterprise backup solutions.
I enjoy converting complex architectures into reliable, repeatable
operations.";

const EXPERIENCE_SUMMARY: &str = "11/2024 – Present — Enterprise Systems Engineer, Veeam — Led enterprise
backup reviews and security hardening; improved customer retention and
solution adoption.
10/2021 – 11/2024 — Team Lead Backup & Storage, Dedalus — Architected
private cloud backup for 5000+ VMs; operated 170+ ESXi hosts.
09/2018 – 10/2021 — Systems Engineer, WBS IT-Service — Datacenter
Solutions; infrastructure operations, pre-sales architecture, automation.
05/2016 – 08/2018 — Consultant, mobileBlox — Pre-sales, training and
operational support.";

const EXPERIENCE_HIGHLIGHTS: &str = "- Virtualization: vSphere, Proxmox, AHV
- Backup & Storage: Veeam, Commvault, PureStorage, NetApp
- Automation & IaC: Ansible, Salt, Terraform, Packer
- Languages / Scripting: Python, Bash, PowerShell
- Containers & Cloud: Docker, Kubernetes, AWS, Azure";

struct Article {
    file: &'static str,
    title: &'static str,
    url: &'static str,
}

const ARTICLES: &[Article] = &[
    Article {
        file: "dns-resilience-part1.md",
        title: "Making DNS More Resilient with Ansible: Automated /etc/hosts - Part 1",
        url: "https://community.veeam.com/automation-desk-103/making-dns-more-resilient-with-ansible-automated-etc-hosts-part-1-9635",
    },
    Article {
        file: "dns-resilience-part2.md",
        title: "Making DNS More Resilient with Ansible: Automated /etc/hosts - Part 2",
        url: "https://community.veeam.com/automation-desk-103/making-dns-more-resilient-with-ansible-automated-etc-hosts-part-2-9653",
    },
    Article {
        file: "veeam-backup-tagging.md",
        title: "Automate Backup Tagging with Veeam ONE: A Smarter Way to Organize Your Jobs",
        url: "https://community.veeam.com/blogs-and-podcasts-57/automate-backup-tagging-with-veeam-one-a-smarter-way-to-organize-your-jobs-12048",
    },
];

fn article_body(article: &Article) -> String {
    let path = format!("/projects/{}", article.file);
    format!(
        "{}\n\nAuthor: Sascha Richter\nPublished on: Veeam Community\n\nUse \"open {}\" or \"xdg-open {}\" to open in browser",
        article.title, path, path
    )
}

/// The resume tree every session starts from.
pub fn build_filesystem() -> VirtualFileSystem {
    let mut vfs = VirtualFileSystem::new();
    vfs.add_dir(
        "/",
        &["about", "assets", "experience", "skills", "contact", "projects", "cv.pdf"],
    );

    vfs.add_dir("/assets", &["cv.pdf"]);
    vfs.add_linked_file(
        "/assets/cv.pdf",
        "CV - Sascha Richter (PDF) [use \"open /assets/cv.pdf\" to view]",
        "/assets/cv_SRichter2026.pdf",
    );
    vfs.add_symlink("/cv.pdf", "/assets/cv.pdf");

    vfs.add_dir("/about", &["bio", "education"]);
    vfs.add_virtual_file("/about/bio", ABOUT_BIO);
    vfs.add_file("/about/education", EDUCATION);

    vfs.add_dir("/experience", &["summary", "highlights", "full"]);
    vfs.add_virtual_file("/experience/summary", EXPERIENCE_SUMMARY);
    vfs.add_virtual_file("/experience/highlights", EXPERIENCE_HIGHLIGHTS);
    vfs.add_virtual_file("/experience/full", EXPERIENCE);

    vfs.add_virtual_file("/contact", CONTACT);
    vfs.add_file("/skills", SKILLS);

    let names: Vec<&str> = ARTICLES.iter().map(|a| a.file).collect();
    vfs.add_dir("/projects", &names);
    for article in ARTICLES {
        vfs.add_linked_file(
            &format!("/projects/{}", article.file),
            &article_body(article),
            article.url,
        );
    }

    vfs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;
    use crate::vfs::VfsNode;

    // every listed child must exist, otherwise lookups would silently differ
    #[test]
    fn test_every_child_has_an_entry() {
        let vfs = build_filesystem();
        let mut pending = vec!["/".to_string()];
        while let Some(dir) = pending.pop() {
            for child in vfs.children(&dir).unwrap() {
                let full = path::join(&dir, child);
                assert!(vfs.lookup(&full).is_some(), "missing entry {}", full);
                if vfs.is_dir(&full) {
                    pending.push(full);
                }
            }
        }
    }

    #[test]
    fn test_cv_symlink_resolves() {
        let vfs = build_filesystem();
        assert!(matches!(vfs.lookup("/cv.pdf"), Some(VfsNode::Symlink { .. })));
        assert_eq!(
            vfs.file_url("/cv.pdf").unwrap(),
            Some("/assets/cv_SRichter2026.pdf")
        );
    }

    #[test]
    fn test_project_articles_have_urls() {
        let vfs = build_filesystem();
        for article in ARTICLES {
            let path = format!("/projects/{}", article.file);
            assert_eq!(vfs.file_url(&path).unwrap(), Some(article.url));
            assert!(vfs.read_file(&path).unwrap().starts_with(article.title));
        }
    }
}
