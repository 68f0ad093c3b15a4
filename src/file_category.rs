/// File categorization by extension and filename keywords.
///
/// Classification consults two ordered tables: an extension table and, when no
/// extension matches, a keyword table searched against the lowercased file stem.
/// Files matching neither land in [`Category::Others`].
///
/// # Examples
///
/// ```
/// use tidyup::file_category::{Category, Classifier};
///
/// let classifier = Classifier::default();
/// assert_eq!(classifier.classify("boleto.pdf"), Category::Docs);
/// assert_eq!(classifier.classify("minha_foto.bin"), Category::Images);
/// assert_eq!(classifier.classify("xyz.unknown123"), Category::Others);
/// ```
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// Represents a broad file category.
///
/// The declared order of variants is the lookup order used by both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Documents, spreadsheets and presentations
    Docs,
    /// Image files
    Images,
    /// Video files
    Videos,
    /// Audio files
    Audio,
    /// Source code and structured text
    Code,
    /// Compressed archives
    Archives,
    /// Fallback for anything unrecognized
    Others,
}

impl Category {
    /// Every category in declared order, `Others` last.
    pub const ALL: [Category; 7] = [
        Category::Docs,
        Category::Images,
        Category::Videos,
        Category::Audio,
        Category::Code,
        Category::Archives,
        Category::Others,
    ];

    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyup::file_category::Category;
    ///
    /// assert_eq!(Category::Docs.dir_name(), "docs");
    /// assert_eq!(Category::Others.dir_name(), "others");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Docs => "docs",
            Category::Images => "images",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Code => "code",
            Category::Archives => "archives",
            Category::Others => "others",
        }
    }

    /// Returns a human-readable description of this category.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Docs => "Documents",
            Category::Images => "Images",
            Category::Videos => "Videos",
            Category::Audio => "Audio",
            Category::Code => "Source code",
            Category::Archives => "Archives",
            Category::Others => "Other files",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Ordered mapping from category to the file extensions that identify it.
///
/// Extensions are stored lowercase without the leading dot. When two categories
/// claim the same extension, the one inserted first wins.
#[derive(Debug, Clone, Default)]
pub struct ExtensionTable {
    entries: Vec<(Category, HashSet<String>)>,
}

impl ExtensionTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds extensions for a category, appending the category to the lookup order
    /// the first time it is seen.
    pub fn with(mut self, category: Category, extensions: &[&str]) -> Self {
        let normalized = extensions.iter().map(|ext| normalize_extension(ext));
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, set)) => set.extend(normalized),
            None => self.entries.push((category, normalized.collect())),
        }
        self
    }

    /// Returns the first category whose set contains `ext` (case-insensitive).
    pub fn lookup(&self, ext: &str) -> Option<Category> {
        let ext = normalize_extension(ext);
        if ext.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(_, set)| set.contains(&ext))
            .map(|(category, _)| *category)
    }
}

/// Ordered mapping from category to substrings searched for in a file stem.
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: Vec<(Category, Vec<String>)>,
}

impl KeywordTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds keywords for a category, appending the category to the lookup order
    /// the first time it is seen.
    pub fn with(mut self, category: Category, keywords: &[&str]) -> Self {
        let lowered = keywords.iter().map(|k| k.to_lowercase());
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, list)) => list.extend(lowered),
            None => self.entries.push((category, lowered.collect())),
        }
        self
    }

    /// Returns the first category with a keyword contained in `stem` (case-insensitive).
    pub fn lookup(&self, stem: &str) -> Option<Category> {
        let stem = stem.to_lowercase();
        self.entries
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| stem.contains(k.as_str())))
            .map(|(category, _)| *category)
    }
}

/// Splits a path's file name into its stem and extension (without the dot).
///
/// A leading dot does not start an extension (`.bashrc` is all stem), and a
/// trailing dot does not leave an empty one (`notes.` is all stem).
///
/// # Examples
///
/// ```
/// use tidyup::file_category::split_file_name;
/// use std::path::Path;
///
/// assert_eq!(
///     split_file_name(Path::new("site.tar.gz")),
///     ("site.tar".to_string(), Some("gz".to_string()))
/// );
/// assert_eq!(split_file_name(Path::new("notes.")), ("notes.".to_string(), None));
/// ```
pub fn split_file_name(path: &Path) -> (String, Option<String>) {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match path.extension().map(|e| e.to_string_lossy().into_owned()) {
        Some(ext) if !ext.is_empty() => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            (stem, Some(ext))
        }
        _ => (name, None),
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim_start_matches('.').to_lowercase()
}

/// Assigns a [`Category`] to a file name using injected extension and keyword tables.
#[derive(Debug, Clone)]
pub struct Classifier {
    extensions: ExtensionTable,
    keywords: KeywordTable,
}

impl Classifier {
    /// Creates a classifier from explicit tables.
    pub fn new(extensions: ExtensionTable, keywords: KeywordTable) -> Self {
        Self {
            extensions,
            keywords,
        }
    }

    /// Classifies a file by its leaf name.
    ///
    /// The extension table is consulted first; the keyword table only when the
    /// extension is unknown or missing. Never fails: the fallback is `Others`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tidyup::file_category::{Category, Classifier};
    ///
    /// let classifier = Classifier::default();
    /// // extension wins over the "video" keyword
    /// assert_eq!(classifier.classify("video_notes.PDF"), Category::Docs);
    /// assert_eq!(classifier.classify("Podcast-Episode"), Category::Audio);
    /// ```
    pub fn classify(&self, file_name: &str) -> Category {
        let (stem, ext) = split_file_name(Path::new(file_name));

        if let Some(ext) = ext
            && let Some(category) = self.extensions.lookup(&ext)
        {
            return category;
        }

        if let Some(category) = self.keywords.lookup(&stem) {
            return category;
        }

        Category::Others
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_extensions(), default_keywords())
    }
}

/// The built-in extension table.
pub fn default_extensions() -> ExtensionTable {
    ExtensionTable::new()
        .with(
            Category::Docs,
            &[
                "pdf", "doc", "docx", "txt", "md", "rtf", "odt", "xls", "xlsx", "csv", "ppt",
                "pptx",
            ],
        )
        .with(
            Category::Images,
            &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tiff"],
        )
        .with(Category::Videos, &["mp4", "mkv", "mov", "avi", "webm"])
        .with(Category::Audio, &["mp3", "wav", "m4a", "aac", "flac", "ogg"])
        .with(
            Category::Code,
            &[
                "py", "js", "ts", "html", "css", "json", "yml", "yaml", "sql", "sh",
            ],
        )
        .with(Category::Archives, &["zip", "rar", "7z", "tar", "gz"])
}

/// The built-in keyword table. Archives and others have no keywords.
pub fn default_keywords() -> KeywordTable {
    KeywordTable::new()
        .with(
            Category::Docs,
            &[
                "boleto",
                "fatura",
                "invoice",
                "nota",
                "recibo",
                "contrato",
                "cv",
                "curriculo",
                "currículo",
            ],
        )
        .with(
            Category::Images,
            &["foto", "img", "image", "screenshot", "print", "scan"],
        )
        .with(
            Category::Videos,
            &["video", "vídeo", "aula", "lesson", "curso"],
        )
        .with(
            Category::Audio,
            &["audio", "áudio", "podcast", "music", "musica", "música"],
        )
        .with(
            Category::Code,
            &["script", "code", "codigo", "código", "projeto", "project"],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_dir_names() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.dir_name()).collect();
        assert_eq!(
            names,
            ["docs", "images", "videos", "audio", "code", "archives", "others"]
        );
    }

    #[test]
    fn test_category_serializes_as_dir_name() {
        let json = serde_json::to_string(&Category::Archives).unwrap();
        assert_eq!(json, "\"archives\"");
        assert_eq!(Category::Videos.to_string(), "videos");
    }

    #[test]
    fn test_extension_match() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("boleto.pdf"), Category::Docs);
        assert_eq!(classifier.classify("holiday.JPG"), Category::Images);
        assert_eq!(classifier.classify("clip.mkv"), Category::Videos);
        assert_eq!(classifier.classify("song.flac"), Category::Audio);
        assert_eq!(classifier.classify("main.py"), Category::Code);
        assert_eq!(classifier.classify("backup.7z"), Category::Archives);
    }

    #[test]
    fn test_extension_beats_keyword() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("foto_scan.zip"), Category::Archives);
        assert_eq!(classifier.classify("podcast.csv"), Category::Docs);
    }

    #[test]
    fn test_keyword_match_case_insensitive() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("minha_foto.bin"), Category::Images);
        assert_eq!(classifier.classify("MINHA_FOTO.bin"), Category::Images);
        assert_eq!(classifier.classify("Aula_01.dat"), Category::Videos);
        assert_eq!(classifier.classify("Currículo Final"), Category::Docs);
        assert_eq!(classifier.classify("ÁUDIO-grupo.opus"), Category::Audio);
    }

    #[test]
    fn test_keyword_order_follows_category_order() {
        // "invoice" (docs) and "image" (images) both appear; docs is declared first
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("image_invoice.bin"), Category::Docs);
    }

    #[test]
    fn test_keyword_only_searches_stem() {
        // "video" is the extension here, so the stem "random" has no keyword
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("random.video"), Category::Others);
    }

    #[test]
    fn test_fallback_to_others() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("xyz.unknown123"), Category::Others);
        assert_eq!(classifier.classify("README"), Category::Others);
        assert_eq!(classifier.classify("trailing."), Category::Others);
    }

    #[test]
    fn test_dotfile_has_no_extension() {
        let classifier = Classifier::default();
        // ".json" is a stem here, not an extension
        assert_eq!(classifier.classify(".json"), Category::Others);
        assert_eq!(classifier.classify(".my_script"), Category::Code);
    }

    #[test]
    fn test_split_file_name_edge_cases() {
        assert_eq!(
            split_file_name(Path::new("dir/boleto.pdf")),
            ("boleto".to_string(), Some("pdf".to_string()))
        );
        assert_eq!(split_file_name(Path::new(".bashrc")), (".bashrc".to_string(), None));
        assert_eq!(split_file_name(Path::new("notes.")), ("notes.".to_string(), None));
        assert_eq!(split_file_name(Path::new("Makefile")), ("Makefile".to_string(), None));
    }

    #[test]
    fn test_multi_dot_name_uses_last_extension() {
        let classifier = Classifier::default();
        assert_eq!(classifier.classify("site.tar.gz"), Category::Archives);
        assert_eq!(classifier.classify("report.final.docx"), Category::Docs);
    }

    #[test]
    fn test_custom_tables() {
        let classifier = Classifier::new(
            ExtensionTable::new().with(Category::Code, &[".RS"]),
            KeywordTable::new().with(Category::Audio, &["Beat"]),
        );
        assert_eq!(classifier.classify("lib.rs"), Category::Code);
        assert_eq!(classifier.classify("summer_beats.bin"), Category::Audio);
        assert_eq!(classifier.classify("boleto.pdf"), Category::Others);
    }

    #[test]
    fn test_first_inserted_category_wins_on_overlap() {
        let table = ExtensionTable::new()
            .with(Category::Code, &["json"])
            .with(Category::Docs, &["json"]);
        assert_eq!(table.lookup("json"), Some(Category::Code));
        assert_eq!(table.lookup(""), None);
    }

    #[test]
    fn test_with_extends_existing_category() {
        let table = KeywordTable::new()
            .with(Category::Images, &["foto"])
            .with(Category::Docs, &["nota"])
            .with(Category::Images, &["selfie"]);
        assert_eq!(table.lookup("my_selfie"), Some(Category::Images));
        assert_eq!(table.lookup("nota_fiscal"), Some(Category::Docs));
    }
}
