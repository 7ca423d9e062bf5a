use terminal_size::{terminal_size, Width};

use crate::api::Schema;
use crate::constant::{HELP_GAP, HELP_INDENT, MINIMUM_DESCRIPTION_WIDTH, USAGE_INLINE_LIMIT};
use crate::parser::interface::UserInterface;

struct Row {
    left: String,
    description: String,
}

/// Read-only help/usage text formatter over a [`Schema`].
///
/// Two-pass: all column widths are measured across every declaration before
/// any line is printed, so repeated invocations produce identical output.
pub(crate) struct Printer {
    about: Option<String>,
    usage_arguments: Vec<String>,
    usage_flags: Vec<String>,
    flag_total: usize,
    argument_rows: Vec<Row>,
    option_rows: Vec<Row>,
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal(schema: &Schema) -> Self {
        let terminal_width = terminal_size().map(|(Width(w), _)| w as usize);
        Self::new(schema, terminal_width)
    }

    pub(crate) fn new(schema: &Schema, terminal_width: Option<usize>) -> Self {
        let usage_arguments = schema
            .requireds
            .iter()
            .map(|required| format!("<{}>", required.label))
            .collect();

        // Only short-form hints appear in the usage line; long-only flags are
        // covered by the OPTIONS block.
        let mut usage_flags = Vec::default();

        for optional in &schema.optionals {
            if let Some(short) = optional.short {
                usage_flags.push(format!("[-{short}<{}>]", optional.label));
            }
        }

        for boolean in &schema.booleans {
            if let Some(short) = boolean.short {
                usage_flags.push(format!("[-{short}]"));
            }
        }

        let argument_rows = schema
            .requireds
            .iter()
            .map(|required| Row {
                left: format!("<{}>", required.label),
                description: required.help.clone().unwrap_or_default(),
            })
            .collect();

        let mut option_rows: Vec<Row> = Vec::default();

        for optional in &schema.optionals {
            let flags = spell_flags(optional.short, optional.long.as_deref());
            let left = format!("{flags} <{}>", optional.label);
            let description = match &optional.help {
                Some(help) => format!("{help} (default: {})", optional.default_repr),
                None => format!("(default: {})", optional.default_repr),
            };
            option_rows.push(Row { left, description });
        }

        for boolean in &schema.booleans {
            option_rows.push(Row {
                left: spell_flags(boolean.short, boolean.long.as_deref()),
                description: boolean.help.clone().unwrap_or_default(),
            });
        }

        Self {
            about: schema.about.clone(),
            usage_arguments,
            usage_flags,
            flag_total: schema.optionals.len() + schema.booleans.len(),
            argument_rows,
            option_rows,
            terminal_width,
        }
    }

    pub(crate) fn print_help(&self, program: &str, user_interface: &(impl UserInterface + ?Sized)) {
        let mut usage = vec![program.to_string()];

        if !self.usage_arguments.is_empty() {
            if self.usage_arguments.len() <= USAGE_INLINE_LIMIT {
                usage.extend(self.usage_arguments.iter().cloned());
            } else {
                usage.push("<ARGUMENTS>".to_string());
            }
        }

        if self.flag_total > 0 {
            if self.flag_total <= USAGE_INLINE_LIMIT {
                usage.extend(self.usage_flags.iter().cloned());
            } else {
                usage.push("[OPTIONS]".to_string());
            }
        }

        user_interface.print("USAGE:".to_string());
        user_interface.print(format!(
            "{:indent$}{}",
            "",
            usage.join(" "),
            indent = HELP_INDENT
        ));
        user_interface.print("".to_string());

        if let Some(about) = &self.about {
            user_interface.print(about.clone());
            user_interface.print("".to_string());
        }

        let width = self
            .argument_rows
            .iter()
            .chain(self.option_rows.iter())
            .map(|row| row.left.len())
            .max()
            .unwrap_or(0);
        let description_width = self.terminal_width.map(|total| {
            std::cmp::max(
                total.saturating_sub(HELP_INDENT + width + HELP_GAP),
                MINIMUM_DESCRIPTION_WIDTH,
            )
        });

        if !self.argument_rows.is_empty() {
            user_interface.print("ARGUMENTS:".to_string());

            for row in &self.argument_rows {
                print_row(row, width, description_width, user_interface);
            }

            user_interface.print("".to_string());
        }

        if !self.option_rows.is_empty() {
            user_interface.print("OPTIONS:".to_string());

            for row in &self.option_rows {
                print_row(row, width, description_width, user_interface);
            }
        }
    }
}

fn spell_flags(short: Option<char>, long: Option<&str>) -> String {
    match (short, long) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("--{long}"),
        (None, None) => String::default(),
    }
}

fn print_row(
    row: &Row,
    width: usize,
    description_width: Option<usize>,
    user_interface: &(impl UserInterface + ?Sized),
) {
    if row.description.is_empty() {
        user_interface.print(format!("{:indent$}{}", "", row.left, indent = HELP_INDENT));
        return;
    }

    match description_width {
        None => {
            user_interface.print(format!(
                "{:indent$}{:<width$}{:gap$}{}",
                "",
                row.left,
                "",
                row.description,
                indent = HELP_INDENT,
                gap = HELP_GAP,
            ));
        }
        Some(description_width) => {
            let continuation = HELP_INDENT + width + HELP_GAP;

            for (i, part) in chunk(&row.description, description_width).iter().enumerate() {
                if i == 0 {
                    user_interface.print(format!(
                        "{:indent$}{:<width$}{:gap$}{part}",
                        "",
                        row.left,
                        "",
                        indent = HELP_INDENT,
                        gap = HELP_GAP,
                    ));
                } else {
                    user_interface.print(format!("{:continuation$}{part}", ""));
                }
            }
        }
    }
}

fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split(' ') {
        if !word.is_empty() {
            if current.is_empty() {
                hyphenate(width, &mut lines, &mut current, word);
            } else if current.len() + word.len() + 1 <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(current);
                current = String::default();
                hyphenate(width, &mut lines, &mut current, word);
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let increment = width - 1;
    let mut left = 0;
    let mut right = increment;

    while right + 1 < word.len() {
        lines.push(format!("{}-", &word[left..right]));
        left += increment;
        right += increment;
    }

    current.push_str(&word[left..]);
}
