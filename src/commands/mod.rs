pub mod cat;
pub mod cd;
pub mod clear;
pub mod exit;
pub mod grep;
pub mod help;
pub mod history;
pub mod hostnamectl;
pub mod htop;
pub mod ls;
pub mod neofetch;
pub mod open;
pub mod pwd;
pub mod sudo;
pub mod tree;
pub mod uname;
pub mod whoami;

#[cfg(test)]
pub(crate) mod fixture {
    use crate::session::Session;
    use crate::vfs::VirtualFileSystem;

    /// Small tree most command tests run against.
    pub fn session() -> Session {
        let mut vfs = VirtualFileSystem::new();
        vfs.add_dir("/", &["home", "about", "test.txt", "cv.pdf"]);
        vfs.add_dir("/home", &["user"]);
        vfs.add_dir("/home/user", &["doc.txt"]);
        vfs.add_file("/home/user/doc.txt", "Hello World\nTest Line\nAnother Line");
        vfs.add_dir("/about", &["bio.txt"]);
        vfs.add_file("/about/bio.txt", "Bio content here");
        vfs.add_linked_file("/test.txt", "Root file content", "https://example.com/test");
        vfs.add_symlink("/cv.pdf", "/test.txt");
        Session::new_with_vfs(vfs)
    }

    pub fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }
}
