//! Doctype string constants

/// HTML 4.01 strict doctype
pub const HTML_4_01_STRICT: &str =
    r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd">"#;

/// HTML 4.01 transitional doctype
pub const HTML_4_01_TRANSITIONAL: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">"#;

/// HTML 4.01 frameset doctype
pub const HTML_4_01_FRAMESET: &str = r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Frameset//EN" "http://www.w3.org/TR/html4/frameset.dtd">"#;

/// XHTML 1.0 strict doctype
pub const XHTML_1_0_STRICT: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#;

/// XHTML 1.0 transitional doctype
pub const XHTML_1_0_TRANSITIONAL: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Transitional//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-transitional.dtd">"#;

/// XHTML 1.0 frameset doctype
pub const XHTML_1_0_FRAMESET: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Frameset//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-frameset.dtd">"#;

/// XHTML 1.1 doctype
pub const XHTML_1_1: &str = r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN" "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">"#;

/// HTML5 doctype
pub const HTML5: &str = "<!DOCTYPE html>";
