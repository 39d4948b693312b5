/// Nominal column width every separator is laid out against.
const TARGET_WIDTH: usize = 69;

const SECTION_OPEN: &str = "/* =----";
const SECTION_CLOSE: &str = "-= */";

/// Columns available for the label and its dash padding in a section banner.
const SECTION_BUDGET: usize = TARGET_WIDTH - (SECTION_OPEN.len() + SECTION_CLOSE.len() + 1);

const SUB_OPEN: &str = "// +----";
const SUB_CLOSE: &str = "+";

/// Subsection rules sit at 65 columns, one step narrower than section banners.
const SUB_WIDTH: usize = 65;
const SUB_BUDGET: usize = SUB_WIDTH - (SUB_OPEN.len() + SUB_CLOSE.len());

/// Column where the `End` block of a closing rule starts.
const SUB_END_COL: usize = 40;
const SUB_END_TAIL: usize = 19;

/// Builds a section banner: the label framed by single spaces and padded
/// with dashes inside block-comment markers. An empty label yields a full
/// divider row. Labels wider than the budget get no padding; they are
/// never truncated and never rejected.
pub fn section(label: &str) -> String {
    let mut row = String::from(SECTION_OPEN);

    if label.is_empty() {
        row.push_str(&"-".repeat(SECTION_BUDGET));
    } else {
        row.push(' ');
        row.push_str(label);
        row.push(' ');
        row.push_str(&"-".repeat(section_fill(label)));
    }

    row.push_str(SECTION_CLOSE);
    row
}

/// Dash run that follows a non-empty label, clamped to zero when the label
/// overflows the budget. Labels are measured in characters, not bytes.
fn section_fill(label: &str) -> usize {
    SECTION_BUDGET.saturating_sub(label.chars().count() + 2)
}

/// One-line layout summary shown in verbose mode.
pub fn describe(label: &str) -> String {
    if label.is_empty() {
        format!("label: empty, fill: {}", SECTION_BUDGET)
    } else {
        format!(
            "label: {} chars, fill: {}",
            label.chars().count(),
            section_fill(label)
        )
    }
}

/// Builds a subsection rule in line-comment form, with the same padding
/// and clamp rules as [`section`].
pub fn sub(label: &str) -> String {
    let mut row = String::from(SUB_OPEN);

    if label.is_empty() {
        row.push_str(&"-".repeat(SUB_BUDGET));
    } else {
        row.push(' ');
        row.push_str(label);
        row.push(' ');
        let used = label.chars().count() + 2;
        row.push_str(&"-".repeat(SUB_BUDGET.saturating_sub(used)));
    }

    row.push_str(SUB_CLOSE);
    row
}

/// Builds the closing counterpart of a subsection rule. The `End` block is
/// anchored at a fixed column so closing rules line up across a file.
pub fn sub_end(label: &str) -> String {
    let mut row = String::from(SUB_OPEN);

    if !label.is_empty() {
        row.push(' ');
        row.push_str(label);
        row.push(' ');
    }

    let head = row.chars().count();
    row.push_str(&"-".repeat(SUB_END_COL.saturating_sub(head)));
    row.push_str(" End ");
    row.push_str(&"-".repeat(SUB_END_TAIL));
    row.push_str(SUB_CLOSE);
    row
}
