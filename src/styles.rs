//! Style tables for the share page.
//!
//! Each rule is keyed by the class name the components put on their nodes.
//! `stylesheet()` turns the whole table into CSS for the document head.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub selector: &'static str,
    pub decls: &'static [(&'static str, &'static str)],
    pub nested: &'static [Rule],
}

impl Rule {
    /// Class name to put on a node; top-level selectors are `.label`.
    pub fn class(&self) -> &'static str {
        self.selector.trim_start_matches('.')
    }

    pub fn to_css(&self) -> String {
        let mut out = String::new();
        // Writing into a String never fails.
        self.write_css(&mut out, "").unwrap_or_default();
        out
    }

    fn write_css(&self, out: &mut impl fmt::Write, parent: &str) -> fmt::Result {
        let selector = if parent.is_empty() {
            self.selector.to_string()
        } else if self.selector.starts_with(':') {
            format!("{parent}{}", self.selector)
        } else {
            format!("{parent} {}", self.selector)
        };

        if !self.decls.is_empty() {
            writeln!(out, "{selector} {{")?;
            for (prop, value) in self.decls {
                writeln!(out, "  {prop}: {value};")?;
            }
            writeln!(out, "}}")?;
        }
        for rule in self.nested {
            rule.write_css(out, &selector)?;
        }
        Ok(())
    }
}

pub const LINK_SHARING: Rule = Rule {
    selector: ".linkSharing",
    decls: &[
        ("width", "50%"),
        ("background-color", "#e0e0e0"),
        ("color", "#333333"),
        ("border-radius", "5px"),
        ("margin", "0px auto 64px"),
        ("box-shadow", "inset 2px 2px 4px #00000040"),
        ("padding", "16px 0px"),
    ],
    nested: &[],
};

pub const SHARE_WRAPPER: Rule = Rule {
    selector: ".shareWrapper",
    decls: &[("position", "relative")],
    nested: &[],
};

pub const SHARE_LINK_TITLE: Rule = Rule {
    selector: ".shareLinkTitle",
    decls: &[("font-size", "24px"), ("margin-bottom", "16px")],
    nested: &[],
};

pub const SHARE_LINK_URL: Rule = Rule {
    selector: ".shareLinkURL",
    decls: &[
        ("border", "0px none #1DB954"),
        ("padding", "0px 8px"),
        ("width", "280px"),
        ("background-color", "#ffffff00"),
        ("outline-style", "none"),
        ("color", "#7d7d7d"),
        ("margin-bottom", "16px"),
    ],
    nested: &[],
};

pub const SHARE_BTN: Rule = Rule {
    selector: ".shareBtn",
    decls: &[
        ("background-color", "#1DB954"),
        ("border-style", "none"),
        ("margin-bottom", "16px"),
        ("box-shadow", "0px 2px 4px #00000040"),
    ],
    nested: &[],
};

// `width` appears twice in the source table; the later 280px wins.
pub const INPUT_LINE: Rule = Rule {
    selector: ".inputLine",
    decls: &[
        ("position", "absolute"),
        ("border", "1px solid #1DB95480"),
        ("bottom", "0px"),
        ("width", "280px"),
        ("transform", "translateX(-33px)"),
        ("box-shadow", "0px 2px 4px #00000040"),
    ],
    nested: &[],
};

pub const SUB_INFO: Rule = Rule {
    selector: ".subInfo",
    decls: &[
        ("font-size", "14px"),
        ("color", "#a2a2a2"),
        ("padding", "0px 8px"),
    ],
    nested: &[Rule {
        selector: "#stop-btn",
        decls: &[
            ("color", "#ff4e4e"),
            ("margin", "0px 16px"),
            ("text-decoration", "underline"),
        ],
        nested: &[Rule {
            selector: ":hover",
            decls: &[("cursor", "pointer"), ("color", "red")],
            nested: &[],
        }],
    }],
};

pub const FLEX_CENTER_END: Rule = Rule {
    selector: ".flexWrapper-center-flexEnd",
    decls: &[
        ("display", "flex"),
        ("align-items", "center"),
        ("justify-content", "flex-end"),
    ],
    nested: &[],
};

pub const DROPDOWN: Rule = Rule {
    selector: ".dropdown",
    decls: &[("position", "relative"), ("display", "inline-block")],
    nested: &[],
};

pub const DROPDOWN_MENU: Rule = Rule {
    selector: ".dropdown-menu",
    decls: &[
        ("position", "absolute"),
        ("top", "100%"),
        ("right", "0"),
        ("z-index", "1000"),
        ("min-width", "10rem"),
        ("margin", "2px 0 0"),
        ("padding", "8px 0"),
        ("list-style", "none"),
        ("background-color", "#ffffff"),
        ("border", "1px solid #00000026"),
        ("border-radius", "4px"),
    ],
    nested: &[],
};

pub const DROPDOWN_ITEM: Rule = Rule {
    selector: ".dropdown-item",
    decls: &[
        ("display", "block"),
        ("padding", "4px 24px"),
        ("color", "#212529"),
        ("white-space", "nowrap"),
        ("cursor", "pointer"),
    ],
    nested: &[Rule {
        selector: ":hover",
        decls: &[("background-color", "#f8f9fa")],
        nested: &[],
    }],
};

pub const ALL: &[Rule] = &[
    LINK_SHARING,
    SHARE_WRAPPER,
    SHARE_LINK_TITLE,
    SHARE_LINK_URL,
    SHARE_BTN,
    INPUT_LINE,
    SUB_INFO,
    FLEX_CENTER_END,
    DROPDOWN,
    DROPDOWN_MENU,
    DROPDOWN_ITEM,
];

pub fn stylesheet() -> String {
    ALL.iter().map(Rule::to_css).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_selectors_are_scoped_under_their_parent() {
        let css = SUB_INFO.to_css();
        assert!(css.contains(".subInfo {\n  font-size: 14px;"));
        assert!(css.contains(".subInfo #stop-btn {\n  color: #ff4e4e;"));
        assert!(css.contains(".subInfo #stop-btn:hover {\n  cursor: pointer;\n  color: red;\n}"));
    }

    #[test]
    fn class_strips_the_leading_dot() {
        assert_eq!(LINK_SHARING.class(), "linkSharing");
        assert_eq!(DROPDOWN_ITEM.class(), "dropdown-item");
    }

    #[test]
    fn stylesheet_covers_every_rule() {
        let css = stylesheet();
        for rule in ALL {
            assert!(css.contains(rule.selector), "missing {}", rule.selector);
        }
    }
}
