use crate::error::VfsError;
use crate::render::TreeNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Directory,
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    pub name: String,
    pub kind: NodeKind,
}

// children keep their authored order, so a Vec instead of a map
#[derive(Debug, Clone, PartialEq)]
pub enum VfsNode {
    File {
        name: String,
        content: String,
    },
    Directory {
        name: String,
        children: Vec<VfsNode>,
    },
}

impl VfsNode {
    pub fn file(name: &str, content: &str) -> Self {
        VfsNode::File { name: name.to_string(), content: content.to_string() }
    }

    /// Child names must be unique within one directory.
    pub fn dir(name: &str, children: Vec<VfsNode>) -> Self {
        debug_assert!(
            children.iter().enumerate().all(|(i, c)| children[..i].iter().all(|o| o.name() != c.name())),
            "duplicate child name in directory {}",
            name
        );
        VfsNode::Directory { name: name.to_string(), children }
    }

    pub fn name(&self) -> &str {
        match self {
            VfsNode::File { name, .. } | VfsNode::Directory { name, .. } => name.as_str(),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            VfsNode::File { .. } => NodeKind::File,
            VfsNode::Directory { .. } => NodeKind::Directory,
        }
    }

    // exact, case-sensitive match
    fn child(&self, name: &str) -> Option<&VfsNode> {
        match self {
            VfsNode::Directory { children, .. } => children.iter().find(|c| c.name() == name),
            VfsNode::File { .. } => None,
        }
    }

    pub fn to_tree(&self) -> TreeNode {
        TreeNode {
            name: self.name().to_string(),
            kind: self.kind(),
            children: match self {
                VfsNode::Directory { children, .. } => children.iter().map(VfsNode::to_tree).collect(),
                VfsNode::File { .. } => Vec::new(),
            },
        }
    }
}

/// Read-only tree browsed by the `fs` commands. Built once per session.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    pub root: VfsNode,
}

impl VirtualFileSystem {
    pub fn new(root: VfsNode) -> Self {
        Self { root }
    }

    /// The tree the portfolio ships with.
    pub fn portfolio() -> Self {
        Self::new(VfsNode::dir(
            "/",
            vec![
                VfsNode::dir(
                    "config",
                    vec![
                        VfsNode::file("site.yaml", SITE_YAML),
                        VfsNode::file("ca-rules.json", CA_RULES_JSON),
                    ],
                ),
                VfsNode::dir(
                    "projects",
                    vec![
                        VfsNode::file("github-analysis.md", GITHUB_ANALYSIS_MD),
                        VfsNode::file("consim.md", CONSIM_MD),
                    ],
                ),
            ],
        ))
    }

    /// Walks `path` from the root. Empty segments are skipped, so leading,
    /// trailing and doubled slashes are all fine. No `.`/`..` handling.
    pub fn resolve(&self, path: &str) -> Result<&VfsNode, VfsError> {
        let mut node = &self.root;
        for comp in path.split('/').filter(|c| !c.is_empty()) {
            if let VfsNode::File { .. } = node {
                return Err(VfsError::NotADirectory(path.to_string()));
            }
            node = node.child(comp).ok_or_else(|| VfsError::PathNotFound(path.to_string()))?;
        }
        Ok(node)
    }

    // ls - names and kinds, authored order
    pub fn list_dir(&self, path: &str) -> Result<Vec<DirEntry>, VfsError> {
        list_directory(self.resolve(path)?, path)
    }

    pub fn read_file(&self, path: &str) -> Result<&str, VfsError> {
        read_file(self.resolve(path)?, path)
    }
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::portfolio()
    }
}

/// Lists a directory node. `path` is only used for the error message.
pub fn list_directory(node: &VfsNode, path: &str) -> Result<Vec<DirEntry>, VfsError> {
    match node {
        VfsNode::Directory { children, .. } => Ok(children
            .iter()
            .map(|c| DirEntry { name: c.name().to_string(), kind: c.kind() })
            .collect()),
        VfsNode::File { .. } => Err(VfsError::NotADirectory(path.to_string())),
    }
}

pub fn read_file<'a>(node: &'a VfsNode, path: &str) -> Result<&'a str, VfsError> {
    match node {
        VfsNode::File { content, .. } => Ok(content.as_str()),
        VfsNode::Directory { .. } => Err(VfsError::NotAFile(path.to_string())),
    }
}

const SITE_YAML: &str = r#"# Static Site Generator Configuration
site:
  title: "Jacob C. Smith - Portfolio"
  description: "Data Analyst & Software Developer"
  author: "Jacob C. Smith"
  theme: "cyberpunk-crimson"

build:
  output_dir: "dist/"
  minify_css: true
  minify_js: true
  optimize_images: true
  critical_css: true

seo:
  open_graph: true
  structured_data: true
  sitemap: true
  robots_txt: true"#;

const CA_RULES_JSON: &str = r#"{
  "id": "portfolio_ambient",
  "version": "1.0",
  "compute_mode": "parallel",
  "neighbor_kernel": {
    "type": "moore",
    "radius": 1
  },
  "transitions": [
    {
      "from_state": "empty",
      "to_state": "growing",
      "condition": {
        "type": "neighbor_count",
        "operator": "in_range",
        "range": [2, 3]
      },
      "energy_delta": 0.3
    }
  ],
  "physics": {
    "pressure_coefficient": 1.2,
    "wave_velocity": 2.0,
    "energy_decay": 0.98,
    "friction": 0.85
  }
}"#;

const GITHUB_ANALYSIS_MD: &str = "# GitHub Repository Language Analysis\n\nAnalyzed 1,200 repos × 12 languages...";

const CONSIM_MD: &str = "# CONSIM - Emergent Consciousness Simulator\n\nBuilt a signal-analysis pipeline...";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_file() {
        let vfs = VirtualFileSystem::portfolio();
        let node = vfs.resolve("config/site.yaml").unwrap();
        assert_eq!(node.kind(), NodeKind::File);
        assert!(!read_file(node, "config/site.yaml").unwrap().is_empty());
    }

    #[test]
    fn tolerates_extra_slashes() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(vfs.resolve("//config///site.yaml/").unwrap().name(), "site.yaml");
        assert_eq!(vfs.resolve("/").unwrap().name(), "/");
    }

    #[test]
    fn empty_path_is_root() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(vfs.resolve("").unwrap(), &vfs.root);
    }

    #[test]
    fn missing_child_is_path_not_found() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(
            vfs.resolve("config/does-not-exist"),
            Err(VfsError::PathNotFound("config/does-not-exist".into()))
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let vfs = VirtualFileSystem::portfolio();
        assert!(matches!(vfs.resolve("Config"), Err(VfsError::PathNotFound(_))));
    }

    #[test]
    fn walking_through_a_file_fails() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(
            vfs.resolve("config/site.yaml/x"),
            Err(VfsError::NotADirectory("config/site.yaml/x".into()))
        );
    }

    #[test]
    fn root_listing_keeps_authored_order() {
        let vfs = VirtualFileSystem::portfolio();
        let names: Vec<String> = vfs.list_dir("").unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["config", "projects"]);

        let config: Vec<String> = vfs.list_dir("config").unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(config, vec!["site.yaml", "ca-rules.json"]);
    }

    #[test]
    fn type_mismatches() {
        let vfs = VirtualFileSystem::portfolio();
        assert_eq!(vfs.list_dir("config/site.yaml"), Err(VfsError::NotADirectory("config/site.yaml".into())));
        assert_eq!(vfs.read_file("projects"), Err(VfsError::NotAFile("projects".into())));
    }

    #[test]
    fn tree_mirrors_structure() {
        let tree = VirtualFileSystem::portfolio().root.to_tree();
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[1].children[1].name, "consim.md");
    }
}
