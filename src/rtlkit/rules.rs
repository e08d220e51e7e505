//! # Spacing Rules
//!
//! The email body templates share a handful of spacing values that drifted apart (13px,
//! 10px, 24px). Each [`SubstitutionRule`] targets one markup fragment and rewrites its
//! value to the 20px standard. The rules are plain data in [`BODY_SPACING_RULES`]; a
//! [`RuleSet`] is the compiled, ready-to-run form.
//!
//! Every replacement produces text that its own pattern (and every other pattern) no
//! longer matches, so normalizing is idempotent: a second pass never changes anything.

use crate::error::Result;
use log::debug;
use regex::Regex;

/// A named regex substitution. `replacement` uses `regex` syntax (`${1}` for groups).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubstitutionRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

/// The body spacing rules, in application order.
pub const BODY_SPACING_RULES: &[SubstitutionRule] = &[
    // Start of the body, right under the header.
    SubstitutionRule {
        name: "body-top",
        pattern: r#"<td style="padding-top: 13px;">(\s*<!-- Top border above subject -->)"#,
        replacement: r#"<td style="padding-top: 20px;">${1}"#,
    },
    // Rule line above the subject.
    SubstitutionRule {
        name: "subject-border",
        pattern: r#"<div style="border-top: 1px solid #000000; margin-bottom: 13px;"></div>"#,
        replacement: r#"<div style="border-top: 1px solid #000000; margin-bottom: 20px;"></div>"#,
    },
    // Underline below the subject.
    SubstitutionRule {
        name: "subject-underline",
        pattern: r#"(letter-spacing: -0\.3px;)\s+(border-bottom: 1px solid #000000; padding-bottom: 13px;)"#,
        replacement: r#"${1}  border-bottom: 1px solid #000000; padding-bottom: 20px;"#,
    },
    SubstitutionRule {
        name: "section-top",
        pattern: r#"<td style="padding-top: 13px;">(\s*<div style="font-family)"#,
        replacement: r#"<td style="padding-top: 20px;">${1}"#,
    },
    SubstitutionRule {
        name: "section-heading",
        pattern: r#"(text-align: right;) margin-bottom: 13px;">"#,
        replacement: r#"${1} margin-bottom: 20px;">"#,
    },
    SubstitutionRule {
        name: "bullet-spacing",
        pattern: r#"(text-align: right;) padding-bottom: 10px;">"#,
        replacement: r#"${1} padding-bottom: 20px;">"#,
    },
    // Gap between sections. The divider margin above it is already 20px.
    SubstitutionRule {
        name: "section-gap",
        pattern: r#"<td style="padding-top: 24px;">"#,
        replacement: r#"<td style="padding-top: 20px;">"#,
    },
];

/// Result of normalizing one piece of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub content: String,
    pub changed: bool,
    /// Names of the rules that changed the content, in application order.
    pub applied: Vec<&'static str>,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    name: &'static str,
    regex: Regex,
    replacement: &'static str,
}

/// An ordered list of compiled substitution rules.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    pub fn compile(rules: &[SubstitutionRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| -> Result<CompiledRule> {
                Ok(CompiledRule {
                    name: rule.name,
                    regex: Regex::new(rule.pattern)?,
                    replacement: rule.replacement,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The compiled [`BODY_SPACING_RULES`].
    pub fn body_spacing() -> Result<Self> {
        Self::compile(BODY_SPACING_RULES)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|rule| rule.name)
    }

    /// Applies every rule, in order, to `content`.
    ///
    /// Rules run unconditionally; one that finds no match is a no-op. `changed` compares
    /// the final text with the input, so content is reported unchanged only when it is
    /// byte-identical.
    pub fn normalize(&self, content: &str) -> Normalized {
        let mut current = content.to_string();
        let mut applied = Vec::new();

        for rule in &self.rules {
            let replaced = rule
                .regex
                .replace_all(&current, rule.replacement)
                .into_owned();
            if replaced != current {
                debug!("rule {} matched", rule.name);
                applied.push(rule.name);
                current = replaced;
            }
        }

        Normalized {
            changed: current != content,
            content: current,
            applied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleSet {
        RuleSet::body_spacing().unwrap()
    }

    /// One sample per rule: (rule name, input fragment, expected output).
    const CASES: &[(&str, &str, &str)] = &[
        (
            "body-top",
            "<td style=\"padding-top: 13px;\">\n    <!-- Top border above subject -->",
            "<td style=\"padding-top: 20px;\">\n    <!-- Top border above subject -->",
        ),
        (
            "subject-border",
            "<div style=\"border-top: 1px solid #000000; margin-bottom: 13px;\"></div>",
            "<div style=\"border-top: 1px solid #000000; margin-bottom: 20px;\"></div>",
        ),
        (
            "subject-underline",
            "letter-spacing: -0.3px;\n      border-bottom: 1px solid #000000; padding-bottom: 13px;",
            "letter-spacing: -0.3px;  border-bottom: 1px solid #000000; padding-bottom: 20px;",
        ),
        (
            "section-top",
            "<td style=\"padding-top: 13px;\">\n  <div style=\"font-family: Arial;\">",
            "<td style=\"padding-top: 20px;\">\n  <div style=\"font-family: Arial;\">",
        ),
        (
            "section-heading",
            "<div style=\"font-weight: bold; text-align: right; margin-bottom: 13px;\">",
            "<div style=\"font-weight: bold; text-align: right; margin-bottom: 20px;\">",
        ),
        (
            "bullet-spacing",
            "<div style=\"text-align: right; padding-bottom: 10px;\">",
            "<div style=\"text-align: right; padding-bottom: 20px;\">",
        ),
        (
            "section-gap",
            "<td style=\"padding-top: 24px;\">",
            "<td style=\"padding-top: 20px;\">",
        ),
    ];

    #[test]
    fn table_compiles_in_order() {
        let names: Vec<_> = rules().names().collect();
        let expected: Vec<_> = BODY_SPACING_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, expected);
        assert_eq!(rules().len(), 7);
    }

    #[test]
    fn every_rule_has_a_case() {
        for rule in BODY_SPACING_RULES {
            assert!(
                CASES.iter().any(|(name, _, _)| *name == rule.name),
                "no case for {}",
                rule.name
            );
        }
    }

    #[test]
    fn each_rule_rewrites_its_fragment() {
        let rules = rules();
        for (name, input, expected) in CASES {
            let out = rules.normalize(input);
            assert_eq!(out.content, *expected, "rule {name}");
            assert!(out.changed, "rule {name}");
            assert_eq!(out.applied, vec![*name], "rule {name}");
        }
    }

    #[test]
    fn each_rule_is_idempotent() {
        let rules = rules();
        for (name, input, _) in CASES {
            let once = rules.normalize(input);
            let twice = rules.normalize(&once.content);
            assert!(!twice.changed, "rule {name}");
            assert_eq!(twice.content, once.content, "rule {name}");
            assert!(twice.applied.is_empty(), "rule {name}");
        }
    }

    #[test]
    fn top_border_comment_is_left_untouched() {
        let input = concat!(
            "<tr>\n",
            "  <td style=\"padding-top: 13px;\">\n",
            "    <!-- Top border above subject -->\n",
            "    <div></div>\n",
            "  </td>\n",
            "</tr>\n",
        );
        let out = rules().normalize(input);
        assert!(out.changed);
        assert!(out.content.contains("<td style=\"padding-top: 20px;\">"));
        assert!(out.content.contains("\n    <!-- Top border above subject -->\n"));
        assert_eq!(out.content.len(), input.len());
    }

    #[test]
    fn subject_border_keeps_other_attributes() {
        let input = "<div style=\"border-top: 1px solid #000000; margin-bottom: 13px;\"></div>";
        let out = rules().normalize(input);
        assert_eq!(
            out.content,
            "<div style=\"border-top: 1px solid #000000; margin-bottom: 20px;\"></div>"
        );
    }

    #[test]
    fn padding_13_without_a_known_follower_is_kept() {
        let input = "<td style=\"padding-top: 13px;\">\n  <p>hello</p>";
        let out = rules().normalize(input);
        assert!(!out.changed);
        assert_eq!(out.content, input);
    }

    #[test]
    fn content_without_matches_is_byte_identical() {
        let input = "<html>\r\n<body style=\"margin: 0;\">\r\n<p>שלום</p>\r\n</body>\r\n</html>";
        let out = rules().normalize(input);
        assert!(!out.changed);
        assert!(out.applied.is_empty());
        assert_eq!(out.content.as_bytes(), input.as_bytes());
    }

    #[test]
    fn empty_content_is_unchanged() {
        let out = rules().normalize("");
        assert!(!out.changed);
        assert_eq!(out.content, "");
    }

    #[test]
    fn full_template_is_idempotent() {
        let template: String = CASES
            .iter()
            .map(|(_, input, _)| format!("{input}\n"))
            .collect::<String>()
            .repeat(2);
        let rules = rules();
        let once = rules.normalize(&template);
        assert!(once.changed);
        assert_eq!(once.applied.len(), 7);
        assert!(!once.content.contains("13px"));
        assert!(!once.content.contains("10px"));
        assert!(!once.content.contains("24px"));

        let twice = rules.normalize(&once.content);
        assert!(!twice.changed);
    }

    #[test]
    fn all_matches_are_replaced() {
        let input = "<td style=\"padding-top: 24px;\"><td style=\"padding-top: 24px;\">";
        let out = rules().normalize(input);
        assert_eq!(
            out.content,
            "<td style=\"padding-top: 20px;\"><td style=\"padding-top: 20px;\">"
        );
        assert_eq!(out.applied, vec!["section-gap"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let bad = [SubstitutionRule {
            name: "bad",
            pattern: "(unclosed",
            replacement: "",
        }];
        assert!(RuleSet::compile(&bad).is_err());
    }
}
