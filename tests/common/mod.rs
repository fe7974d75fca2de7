#![allow(dead_code)]

use git2::{Repository, Signature};
use std::fs;
use std::path::Path;

/// Initialise a repository with a local identity and no commits.
pub fn init_empty_repo(dir: &Path) -> Repository {
    let repo = Repository::init(dir).unwrap();
    {
        let mut config = repo.config().unwrap();
        config.set_str("user.name", "Verman Test").unwrap();
        config.set_str("user.email", "test@example.com").unwrap();
    }
    repo
}

/// Initialise a repository with one commit containing `README.md`.
pub fn init_repo(dir: &Path) -> Repository {
    let repo = init_empty_repo(dir);
    commit_file(&repo, dir, "README.md", "hello\n", "initial commit");
    repo
}

/// Write `name` with `content` and commit it on HEAD.
pub fn commit_file(repo: &Repository, dir: &Path, name: &str, content: &str, message: &str) {
    fs::write(dir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();

    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let signature = Signature::now("Verman Test", "test@example.com").unwrap();
    let parent = repo.head().ok().map(|h| h.peel_to_commit().unwrap());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .unwrap();
}

/// Lightweight tag on HEAD.
pub fn tag_head(repo: &Repository, name: &str) {
    let head = repo.head().unwrap().peel_to_commit().unwrap();
    repo.tag_lightweight(name, head.as_object(), false).unwrap();
}

/// Message of the commit at HEAD.
pub fn head_message(repo: &Repository) -> String {
    repo.head()
        .unwrap()
        .peel_to_commit()
        .unwrap()
        .message()
        .unwrap_or_default()
        .to_string()
}

/// Whether `dir` sits inside some enclosing repository already.
pub fn inside_repository(dir: &Path) -> bool {
    Repository::discover(dir).is_ok()
}
