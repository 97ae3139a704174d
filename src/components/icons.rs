//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Sports, LuArchive as Records, LuBookOpen as FilePdf,
        LuCalendar as Calendar, LuChevronLeft as ChevronLeft, LuDownload as Download,
        LuFile as File, LuFileArchive as FileArchive, LuFileText as FileText,
        LuFileType as FileWord, LuFolder as Folder, LuImage as FileImage,
        LuLanguages as Language, LuMusic as Music, LuTrendingUp as Planning,
        LuTriangleAlert as Warning, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsActivity as Sports, BsArchive as Records, BsCalendar3 as Calendar,
        BsChevronLeft as ChevronLeft, BsDownload as Download, BsExclamationTriangle as Warning,
        BsFileEarmark as File, BsFileEarmarkImage as FileImage, BsFileEarmarkPdf as FilePdf,
        BsFileEarmarkText as FileText, BsFileEarmarkWord as FileWord,
        BsFileEarmarkZip as FileArchive, BsFolderFill as Folder, BsGraphUp as Planning,
        BsMusicNoteBeamed as Music, BsTranslate as Language, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CLOSE, Close);
themed_icon!(DOWNLOAD, Download);
themed_icon!(WARNING, Warning);

themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(FILE_WORD, FileWord);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_ARCHIVE, FileArchive);

themed_icon!(CATEGORY_SPORTS, Sports);
themed_icon!(CATEGORY_LANGUAGE, Language);
themed_icon!(CATEGORY_PLANNING, Planning);
themed_icon!(CATEGORY_MUSIC, Music);
themed_icon!(CATEGORY_RECORDS, Records);
themed_icon!(CATEGORY_CALENDAR, Calendar);
