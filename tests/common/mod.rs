//! Common test utilities for Viltkit integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A Laravel-shaped project directory for integration tests
pub struct TestProject {
    /// Temporary directory, removed on drop
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the project root
    pub path: PathBuf,
}

impl TestProject {
    /// A project with an artisan script, the minimum to pass the root check
    pub fn new() -> Self {
        let project = Self::empty();
        project.write_file("artisan", "#!/usr/bin/env php\n");
        project
    }

    /// A bare directory without an artisan script
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Seed one stub under the composer-installed package root
    #[allow(dead_code)]
    pub fn add_vendor_stub(&self, id: &str, content: &str) {
        self.write_file(&format!("vendor/viltkit/panel/stubs/{}", id), content);
    }

    /// Seed one stub under the local package checkout root
    #[allow(dead_code)]
    pub fn add_packages_stub(&self, id: &str, content: &str) {
        self.write_file(&format!("packages/viltkit/panel/stubs/{}", id), content);
    }

    /// Create a module directory under packages/viltkit, optionally with a
    /// composer.json manifest
    #[allow(dead_code)]
    pub fn add_module(&self, name: &str, manifest: Option<&str>) -> PathBuf {
        let dir = self.path.join("packages/viltkit").join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create module directory");
        if let Some(content) = manifest {
            std::fs::write(dir.join("composer.json"), content)
                .expect("Failed to write composer.json");
        }
        dir
    }

    /// Write a documentation file inside a module's docs directory
    #[allow(dead_code)]
    pub fn add_module_doc(&self, module: &str, file: &str, content: &str) {
        self.write_file(
            &format!("packages/viltkit/{}/docs/{}", module, file),
            content,
        );
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file relative to the project root
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists relative to the project root
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_has_artisan_script() {
        let project = TestProject::new();
        assert!(project.file_exists("artisan"));
    }

    #[test]
    fn test_empty_project_has_no_artisan_script() {
        let project = TestProject::empty();
        assert!(!project.file_exists("artisan"));
    }

    #[test]
    fn test_project_file_operations() {
        let project = TestProject::new();
        project.write_file("config/app.php", "<?php\n");
        assert!(project.file_exists("config/app.php"));
        assert_eq!(project.read_file("config/app.php"), "<?php\n");
    }

    #[test]
    fn test_add_module_writes_manifest() {
        let project = TestProject::new();
        project.add_module("panel", Some(r#"{"name": "viltkit/panel"}"#));
        assert!(project.file_exists("packages/viltkit/panel/composer.json"));
    }

    #[test]
    fn test_add_module_without_manifest() {
        let project = TestProject::new();
        let dir = project.add_module("scratch", None);
        assert!(dir.is_dir());
        assert!(!project.file_exists("packages/viltkit/scratch/composer.json"));
    }
}
