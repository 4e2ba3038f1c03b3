// icon_catalog.rs: Application families and the static icon catalog
//
// One CatalogEntry per ApplicationFamily, in declaration order.  Extension
// lookup is a first-match scan over this order, so entry order is part of
// the contract.
//
// All tokens are lowercase without a leading dot.  Callers lowercase the
// extension before lookup; catalog tokens are compared verbatim.

use serde::Serialize;





////////////////////////////////////////////////////////////////////////////////

/// Known application families.
/// Discriminants match the numeric codes used by existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum ApplicationFamily {
    Access      = 1,
    Aspx        = 2,
    Code        = 3,
    Css         = 4,
    Csv         = 5,
    Excel       = 6,
    Html        = 7,
    Image       = 8,
    Mail        = 9,
    OneNote     = 10,
    Pdf         = 11,
    PowerApps   = 12,
    PowerPoint  = 13,
    Project     = 14,
    Publisher   = 15,
    Sass        = 16,
    Visio       = 17,
    Word        = 18,
    Folder      = 19,
}





////////////////////////////////////////////////////////////////////////////////
//
//  impl ApplicationFamily
//
//  Family enumeration, naming, and code conversion.
//
////////////////////////////////////////////////////////////////////////////////

impl ApplicationFamily {
    pub const COUNT: usize = 19;

    /// All families in declaration order, for iteration.
    pub const ALL: [ApplicationFamily; Self::COUNT] = [
        ApplicationFamily::Access,
        ApplicationFamily::Aspx,
        ApplicationFamily::Code,
        ApplicationFamily::Css,
        ApplicationFamily::Csv,
        ApplicationFamily::Excel,
        ApplicationFamily::Html,
        ApplicationFamily::Image,
        ApplicationFamily::Mail,
        ApplicationFamily::OneNote,
        ApplicationFamily::Pdf,
        ApplicationFamily::PowerApps,
        ApplicationFamily::PowerPoint,
        ApplicationFamily::Project,
        ApplicationFamily::Publisher,
        ApplicationFamily::Sass,
        ApplicationFamily::Visio,
        ApplicationFamily::Word,
        ApplicationFamily::Folder,
    ];

    ////////////////////////////////////////////////////////////////////////////
    //
    //  name
    //
    //  Display name of this family.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn name(&self) -> &'static str {
        match self {
            ApplicationFamily::Access     => "Access",
            ApplicationFamily::Aspx       => "ASPX",
            ApplicationFamily::Code       => "Code",
            ApplicationFamily::Css        => "CSS",
            ApplicationFamily::Csv        => "CSV",
            ApplicationFamily::Excel      => "Excel",
            ApplicationFamily::Html       => "HTML",
            ApplicationFamily::Image      => "Image",
            ApplicationFamily::Mail       => "Mail",
            ApplicationFamily::OneNote    => "OneNote",
            ApplicationFamily::Pdf        => "PDF",
            ApplicationFamily::PowerApps  => "PowerApps",
            ApplicationFamily::PowerPoint => "PowerPoint",
            ApplicationFamily::Project    => "Project",
            ApplicationFamily::Publisher  => "Publisher",
            ApplicationFamily::Sass       => "SASS",
            ApplicationFamily::Visio      => "Visio",
            ApplicationFamily::Word       => "Word",
            ApplicationFamily::Folder     => "Folder",
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_name
    //
    //  Case-insensitive lookup by display name.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_name(name: &str) -> Option<ApplicationFamily> {
        let trimmed = name.trim();

        Self::ALL
            .iter()
            .copied()
            .find (|family| family.name().eq_ignore_ascii_case (trimmed))
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  from_code
    //
    //  Lookup by numeric code.  Codes outside the known range yield None.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn from_code(code: u32) -> Option<ApplicationFamily> {
        Self::ALL.iter().copied().find (|family| *family as u32 == code)
    }
}





////////////////////////////////////////////////////////////////////////////////

/// Catalog record for one application family.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub family:       ApplicationFamily,

    /// Recognized file extensions (lowercase, no dot).  May be empty.
    pub extensions:   &'static [&'static str],

    /// Brand icon name for this family.
    pub icon_name:    &'static str,

    /// Tokens that have a dedicated brand bitmap.  First entry is the family default.
    pub image_tokens: &'static [&'static str],

    /// Tokens available on the CDN.  First entry is the family default.
    pub cdn_tokens:   Option<&'static [&'static str]>,
}





////////////////////////////////////////////////////////////////////////////////
//
//  CATALOG
//
//  Static catalog of every application family.  Exactly one entry per
//  family.  The duplicated "sldx" in PowerPoint is kept verbatim.
//
////////////////////////////////////////////////////////////////////////////////

pub static CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        family:       ApplicationFamily::Access,
        extensions:   &["accdb", "accde", "accdt", "accdr", "mdb"],
        icon_name:    "AccessLogo",
        image_tokens: &["accdb"],
        cdn_tokens:   Some (&["accdb"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Aspx,
        extensions:   &["aspx", "master"],
        icon_name:    "FileASPX",
        image_tokens: &[],
        cdn_tokens:   Some (&["spo"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Code,
        extensions:   &["js", "ts", "cs", "json"],
        icon_name:    "FileCode",
        image_tokens: &[],
        cdn_tokens:   Some (&["code"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Css,
        extensions:   &["css"],
        icon_name:    "FileCSS",
        image_tokens: &[],
        cdn_tokens:   Some (&["code"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Csv,
        extensions:   &["csv"],
        icon_name:    "ExcelDocument",
        image_tokens: &["csv"],
        cdn_tokens:   Some (&["csv"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Excel,
        extensions:   &["xls", "xlt", "xlm", "xlsx", "xlsm", "xltx", "xltm", "ods"],
        icon_name:    "ExcelDocument",
        image_tokens: &["xlsx", "xls", "xltx", "ods"],
        cdn_tokens:   Some (&["xlsx", "xltx", "ods"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Html,
        extensions:   &["html"],
        icon_name:    "FileHTML",
        image_tokens: &[],
        cdn_tokens:   Some (&["html"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Image,
        extensions:   &["jpg", "jpeg", "gif", "png"],
        icon_name:    "FileImage",
        image_tokens: &[],
        cdn_tokens:   Some (&["photo"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Mail,
        extensions:   &["msg"],
        icon_name:    "Mail",
        image_tokens: &[],
        cdn_tokens:   Some (&["email"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::OneNote,
        extensions:   &["one", "onepkg", "onetoc"],
        icon_name:    "OneNoteLogo",
        image_tokens: &["one", "onepkg", "onetoc"],
        cdn_tokens:   Some (&["one", "onetoc"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Pdf,
        extensions:   &["pdf"],
        icon_name:    "PDF",
        image_tokens: &[],
        cdn_tokens:   Some (&["pdf"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::PowerApps,
        extensions:   &["msapp"],
        icon_name:    "PowerApps",
        image_tokens: &[],
        cdn_tokens:   None,
    },
    CatalogEntry {
        family:       ApplicationFamily::PowerPoint,
        extensions:   &[
            "ppt", "pot", "pps", "pptx", "pptm", "potx",
            "potm", "ppam", "ppsx", "ppsm", "sldx", "sldx",
        ],
        icon_name:    "PowerPointDocument",
        image_tokens: &["odp", "potx", "ppsx", "pptx"],
        cdn_tokens:   Some (&["pptx", "odp", "potx", "ppsx"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Project,
        extensions:   &["mpp", "mpt", "mpx", "mpd"],
        icon_name:    "ProjectLogoInverse",
        image_tokens: &["mpp", "mpt"],
        cdn_tokens:   Some (&["mpp", "mpt"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Publisher,
        extensions:   &["pub"],
        icon_name:    "PublisherLogo",
        image_tokens: &["pub"],
        cdn_tokens:   Some (&["pub"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Sass,
        extensions:   &["scss", "sass"],
        icon_name:    "FileSass",
        image_tokens: &[],
        cdn_tokens:   Some (&["code"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Visio,
        extensions:   &["vsd", "vss", "vst", "vdx", "vsx", "vtx", "vsdx"],
        icon_name:    "VisioDocument",
        image_tokens: &["vsdx", "vssx", "vstx"],
        cdn_tokens:   Some (&["vsdx", "vssx", "vstx"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Word,
        extensions:   &["doc", "dot", "docx", "docm", "dotx", "dotm", "docb", "odt"],
        icon_name:    "WordDocument",
        image_tokens: &["docx", "dotx", "odt"],
        cdn_tokens:   Some (&["docx", "dotx", "odt"]),
    },
    CatalogEntry {
        family:       ApplicationFamily::Folder,
        extensions:   &[],
        icon_name:    "Folder",
        image_tokens: &["folder"],
        cdn_tokens:   Some (&["folder"]),
    },
];





////////////////////////////////////////////////////////////////////////////////
//
//  impl CatalogEntry
//
//  Convenience accessors over optional token lists.
//
////////////////////////////////////////////////////////////////////////////////

impl CatalogEntry {

    ////////////////////////////////////////////////////////////////////////////
    //
    //  cdn_tokens_or_empty
    //
    //  CDN tokens as a slice; absent and empty are treated alike.
    //
    ////////////////////////////////////////////////////////////////////////////

    pub fn cdn_tokens_or_empty(&self) -> &'static [&'static str] {
        self.cdn_tokens.unwrap_or (&[])
    }
}





////////////////////////////////////////////////////////////////////////////////
//
//  find_by_extension
//
//  First catalog entry (declaration order) whose extension list contains
//  `ext`.  `ext` must already be lowercased by the caller.
//
////////////////////////////////////////////////////////////////////////////////

pub fn find_by_extension(ext: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find (|entry| entry.extensions.contains (&ext))
}





////////////////////////////////////////////////////////////////////////////////
//
//  find_by_family
//
//  The catalog entry for `family`.
//
////////////////////////////////////////////////////////////////////////////////

pub fn find_by_family(family: ApplicationFamily) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find (|entry| entry.family == family)
}





////////////////////////////////////////////////////////////////////////////////
//
//  Unit Tests
//
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::collections::HashSet;





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_one_entry_per_family
    //
    //  Every family appears exactly once, in declaration order.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_one_entry_per_family() {
        assert_eq! (CATALOG.len(), ApplicationFamily::COUNT);

        for (entry, family) in CATALOG.iter().zip (ApplicationFamily::ALL.iter()) {
            assert_eq! (entry.family, *family);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_all_tokens_are_lowercase_without_dot
    //
    //  Lookups compare the lowercased extension against catalog tokens
    //  verbatim.  A mixed-case token would silently never match, so guard
    //  the assumption here.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_all_tokens_are_lowercase_without_dot() {
        for entry in CATALOG {
            let all = entry.extensions.iter()
                .chain (entry.image_tokens.iter())
                .chain (entry.cdn_tokens_or_empty().iter());

            for token in all {
                assert! (!token.starts_with ('.'), "Token must not start with '.': {}", token);
                assert_eq! (*token, token.to_ascii_lowercase(), "Token must be lowercase: {}", token);
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_no_extension_claimed_by_two_families
    //
    //  First-match order would hide the second family, so each extension
    //  should belong to one family only.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_no_extension_claimed_by_two_families() {
        let mut owner: HashMap<&str, ApplicationFamily> = HashMap::new();

        for entry in CATALOG {
            let unique: HashSet<&str> = entry.extensions.iter().copied().collect();
            for ext in unique {
                if let Some (previous) = owner.insert (ext, entry.family) {
                    panic! ("Extension '{}' claimed by {:?} and {:?}", ext, previous, entry.family);
                }
            }
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_find_by_extension_first_match
    //
    //  Known extensions map to their family; unknown and empty map to None.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_find_by_extension_first_match() {
        assert_eq! (find_by_extension ("docx").map (|e| e.family), Some (ApplicationFamily::Word));
        assert_eq! (find_by_extension ("csv").map (|e| e.family),  Some (ApplicationFamily::Csv));
        assert_eq! (find_by_extension ("sldx").map (|e| e.family), Some (ApplicationFamily::PowerPoint));
        assert_eq! (find_by_extension ("json").map (|e| e.family), Some (ApplicationFamily::Code));
        assert! (find_by_extension ("xyz123").is_none());
        assert! (find_by_extension ("").is_none());
        assert! (find_by_extension ("folder").is_none());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_find_by_extension_is_case_sensitive
    //
    //  Lowercasing belongs to the caller.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_find_by_extension_is_case_sensitive() {
        assert! (find_by_extension ("DOCX").is_none());
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_find_by_family_is_idempotent
    //
    //  Repeated lookups return the same static entry.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_find_by_family_is_idempotent() {
        for family in ApplicationFamily::ALL {
            let first  = find_by_family (family).unwrap();
            let second = find_by_family (family).unwrap();
            assert! (std::ptr::eq (first, second));
            assert_eq! (first.family, family);
        }
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_family_name_roundtrip
    //
    //  from_name(name()) and from_code(code) return the same family.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_family_name_roundtrip() {
        for family in ApplicationFamily::ALL {
            assert_eq! (ApplicationFamily::from_name (family.name()), Some (family));
            assert_eq! (ApplicationFamily::from_code (family as u32), Some (family));
        }

        assert_eq! (ApplicationFamily::from_name ("powerpoint"), Some (ApplicationFamily::PowerPoint));
        assert_eq! (ApplicationFamily::from_name (" pdf "), Some (ApplicationFamily::Pdf));
        assert_eq! (ApplicationFamily::from_name ("Lotus"), None);
        assert_eq! (ApplicationFamily::from_code (0), None);
        assert_eq! (ApplicationFamily::from_code (20), None);
    }





    ////////////////////////////////////////////////////////////////////////////
    //
    //  test_power_apps_has_no_cdn_tokens
    //
    //  Absent CDN tokens read back as an empty slice.
    //
    ////////////////////////////////////////////////////////////////////////////

    #[test]
    fn test_power_apps_has_no_cdn_tokens() {
        let entry = find_by_family (ApplicationFamily::PowerApps).unwrap();
        assert! (entry.cdn_tokens.is_none());
        assert! (entry.cdn_tokens_or_empty().is_empty());
    }
}
