// ============================================================================
// LitWrap - English Translation Table
// ============================================================================
//
// 文件: src/i18n/en_us.rs
// 职责: English translation content definition
// 边界:
//   - ✅ English translation strings definition
//   - ❌ Should not contain translation logic
//   - ❌ Should not contain other language translations
//
// ============================================================================

/// English translation table
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // Run related
    ("run.loading_catalog", "Loading catalog: {}"),
    ("run.catalog_loaded", "Loaded {} catalog entries"),
    ("run.catalog_empty", "Catalog has no entries, nothing will be translated: {}"),
    ("run.scanning", "Scanning {} for *.{} files"),
    ("run.header", "Translated files:"),
    (
        "run.completed",
        "{} files scanned, {} files translated, {} lines rewritten",
    ),
    ("run.no_changes", "No files needed translation"),
    // Check related
    ("check.start", "Checking for translatable literals (dry run)..."),
    ("check.none", "Nothing to translate"),
    ("check.would_change", "{} files would be translated ({} lines)"),
    ("check.file_header", "{} ({} lines)"),
    ("check.line_number", "line {}"),
    // Init related
    ("init.start", "Initializing LitWrap configuration..."),
    ("init.config_exists", "Config file already exists: {}"),
    (
        "init.use_force_hint",
        "Use --force to overwrite existing config file",
    ),
    ("init.config_created", "Config file created: {}"),
    ("init.create_failed", "Failed to create config file: {}"),
    (
        "init.next_steps",
        "You can now edit the config file to suit your project needs",
    ),
    // Error messages
    ("error.read_catalog", "Failed to read catalog: {}"),
    ("error.parse_catalog", "Malformed catalog: {}"),
    ("error.read_source", "Failed to read source file: {}"),
    ("error.write_source", "Failed to write source file: {}"),
    ("error.walk_directory", "Failed to walk directory"),
    ("error.invalid_ignore_pattern", "Invalid ignore pattern: {}"),
    (
        "error.workspace_not_exist",
        "Workspace path does not exist: {}",
    ),
    ("error.unknown_format", "Unknown output format: {}"),
];
