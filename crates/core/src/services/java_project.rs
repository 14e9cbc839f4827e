//! Snapshot of the Java sources visible from the file being edited

use crate::{
    config::Config,
    error::Result,
    parser::{DeclarationExtractor, JavaParser, JavaSyntaxTree},
    services::TypeIndex,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tree_sitter::Tree;
use walkdir::{DirEntry, WalkDir};

/// Files that mark the root of a Java project
pub const PROJECT_MARKERS: [&str; 6] = [
    "pom.xml",
    "build.gradle",
    "build.gradle.kts",
    "settings.gradle",
    "settings.gradle.kts",
    ".o2ox.json",
];

const IGNORED_DIRS: [&str; 4] = ["target", "build", "out", "node_modules"];

pub struct JavaProject {
    path: PathBuf,
    source: String,
    tree: Tree,
    index: TypeIndex,
    parser: JavaParser,
    extractor: DeclarationExtractor,
}

impl JavaProject {
    /// Parse `file` and index every `.java` file under `source_root`.
    ///
    /// Without an explicit root the nearest ancestor holding a build file is
    /// used, falling back to the file's own directory.
    pub fn load(file: &Path, source_root: Option<&Path>, config: &Config) -> Result<Self> {
        let source = fs::read_to_string(file)?;
        let mut project = Self::from_source(file, source, config)?;

        let root = match source_root {
            Some(root) => root.to_path_buf(),
            None => Self::find_project_root(file).unwrap_or_else(|| file_dir(file).to_path_buf()),
        };
        let added = project.index_directory(&root)?;
        info!(
            "Indexed {} declarations ({} from {})",
            project.index.len(),
            added,
            root.display()
        );
        Ok(project)
    }

    /// Project made of a single in-memory source file
    pub fn from_source(path: &Path, source: String, config: &Config) -> Result<Self> {
        let mut parser = JavaParser::new()?;
        let extractor = DeclarationExtractor::new(
            config.synthesize_lombok_setters,
            config.fluent_markers.clone(),
        );
        let tree = parser.parse(&source)?;

        let mut index = TypeIndex::new();
        index.extend(extractor.extract(&tree, &source, Some(path))?);

        Ok(Self {
            path: path.to_path_buf(),
            source,
            tree,
            index,
            parser,
            extractor,
        })
    }

    /// Index the declarations of another source file; returns how many it had
    pub fn add_source(&mut self, path: &Path, source: &str) -> Result<usize> {
        let declarations = self
            .parser
            .get_declarations(source, Some(path), &self.extractor)?;
        let count = declarations.len();
        self.index.extend(declarations);
        Ok(count)
    }

    pub fn find_project_root(file: &Path) -> Option<PathBuf> {
        file_dir(file)
            .ancestors()
            .find(|dir| PROJECT_MARKERS.iter().any(|m| dir.join(m).is_file()))
            .map(Path::to_path_buf)
    }

    fn index_directory(&mut self, root: &Path) -> Result<usize> {
        let edited = fs::canonicalize(&self.path).ok();
        let mut added = 0;

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_ignored(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|s| s.to_str()) != Some("java")
            {
                continue;
            }
            if let (Some(edited), Ok(candidate)) = (&edited, fs::canonicalize(path)) {
                if *edited == candidate {
                    continue;
                }
            }

            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    warn!("Skipping {}: {e}", path.display());
                    continue;
                }
            };
            match self.add_source(path, &source) {
                Ok(count) => {
                    debug!("{}: {} declarations", path.display(), count);
                    added += count;
                }
                Err(e) => warn!("Skipping {}: {e}", path.display()),
            }
        }
        Ok(added)
    }

    pub fn syntax_tree(&self) -> JavaSyntaxTree<'_> {
        JavaSyntaxTree::new(&self.tree, &self.source)
    }

    pub fn types(&self) -> &TypeIndex {
        &self.index
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Directory holding `file`; `.` for bare file names
fn file_dir(file: &Path) -> &Path {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn is_ignored(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || IGNORED_DIRS.contains(&&*name)
}
