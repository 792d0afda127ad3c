//! One keystroke against a formatted numeric field
//!
//! The input surface reports an edit as "replace `range` of the displayed
//! text with `replacement`". Instead of letting the surface apply it, the
//! edit is spliced here, the result re-parsed, clamped and re-formatted, and
//! the cursor placed next to the digits the user was working on.

use rust_decimal::Decimal;
use tracing::trace;

use crate::cursor::{
    cursor_begin_position, cursor_max_position, cursor_min_position, leading_run_end,
};
use crate::formatter::format;
use crate::parser::parse_clamped;
use crate::types::{EditRange, EditResult, NumberFormatSpec};
use crate::validator::Validator;

/// Apply one edit to a field's displayed text
///
/// An empty `replacement` is a deletion of `range`. The returned text is
/// always canonical for `spec`, and the cursor lies within the text.
///
/// # Examples
/// ```
/// use tip_input::{apply_edit, EditRange, NumberFormatSpec, Validator};
///
/// let spec = NumberFormatSpec::decimal();
/// let result = apply_edit("1,234", EditRange::new(2, 1), "", &spec, &Validator::default());
/// assert_eq!(result.text, "134");
/// assert_eq!(result.cursor_position, 1);
/// ```
pub fn apply_edit(
    original: &str,
    range: EditRange,
    replacement: &str,
    spec: &NumberFormatSpec,
    validator: &Validator,
) -> EditResult {
    let chars: Vec<char> = original.chars().collect();
    let range = range.clamped(chars.len());

    let result = if replacement.is_empty() {
        apply_deletion(&chars, range, spec, validator)
    } else {
        apply_insertion(original, &chars, range, replacement, spec, validator)
    };

    trace!(
        original = %original,
        location = range.location,
        length = range.length,
        replacement = %replacement,
        text = %result.text,
        cursor = result.cursor_position,
        "Applied edit"
    );
    result
}

fn reformat(modified: &str, spec: &NumberFormatSpec, validator: &Validator) -> String {
    format(parse_clamped(modified, spec, validator), spec)
}

fn finish(text: String, location: isize) -> EditResult {
    let len = text.chars().count() as isize;
    EditResult {
        cursor_position: location.clamp(0, len) as usize,
        text,
    }
}

fn apply_deletion(
    chars: &[char],
    range: EditRange,
    spec: &NumberFormatSpec,
    validator: &Validator,
) -> EditResult {
    let cut = &chars[range.location..range.upper_bound()];
    let cut_has_digits = cut.iter().any(|c| NumberFormatSpec::is_digit(*c));

    // A separator typed but not yet followed by a fraction digit is simply
    // taken back.
    let pending_separator = cut == [spec.decimal_separator]
        && !chars[range.upper_bound()..]
            .iter()
            .any(|c| NumberFormatSpec::is_digit(*c));
    if pending_separator {
        let modified: String = chars[..range.location]
            .iter()
            .chain(&chars[range.upper_bound()..])
            .collect();
        let text = reformat(&modified, spec, validator);
        let min_position = cursor_min_position(&text);
        let max_position = cursor_max_position(&text).max(min_position);
        let location = range.location.clamp(min_position, max_position);
        return finish(text, location as isize);
    }

    let mut extra_location_offset: isize = 0;

    let modified: String = if cut_has_digits {
        chars[..range.location]
            .iter()
            .chain(&chars[range.upper_bound()..])
            .collect()
    } else {
        // Only separators or symbols were cut: remove the nearest digit to
        // the left instead, carrying a decimal separator over to the right.
        let mut prefix: Vec<char> = chars[..range.upper_bound()].to_vec();
        let mut suffix: Vec<char> = chars[range.upper_bound()..].to_vec();
        while let Some(removed) = prefix.pop() {
            if removed == spec.decimal_separator {
                suffix.insert(0, removed);
                extra_location_offset -= 1;
                continue;
            }
            if NumberFormatSpec::is_digit(removed) {
                break;
            }
        }
        prefix.into_iter().chain(suffix).collect()
    };

    let text = reformat(&modified, spec, validator);
    let length_diff = chars.len() as isize - text.chars().count() as isize;
    let location = range.location as isize - (length_diff - 1).max(0) + extra_location_offset;

    let min_position = cursor_min_position(&text) as isize;
    let max_position = cursor_max_position(&text) as isize;
    let location = location.max(min_position).min(max_position.max(min_position));
    finish(text, location)
}

fn apply_insertion(
    original: &str,
    chars: &[char],
    original_range: EditRange,
    replacement: &str,
    spec: &NumberFormatSpec,
    validator: &Validator,
) -> EditResult {
    let separator = spec.decimal_separator;
    let typed_separator = replacement.chars().eq(std::iter::once(separator));

    // Typing right at the placeholder replaces it instead of prepending to it.
    // The placeholder is the first digit, behind any prefix.
    let first_digit = cursor_min_position(original);
    let replaces_placeholder = original_range.is_empty()
        && original_range.location <= first_digit + 1
        && parse_clamped(original, spec, validator) == Decimal::ZERO;
    let (range, original_range) = if replaces_placeholder {
        let caret = EditRange::caret(original_range.location.max(first_digit));
        (EditRange::new(first_digit, 1).clamped(chars.len()), caret)
    } else {
        (original_range, original_range)
    };

    let modified: String = chars[..range.location]
        .iter()
        .copied()
        .chain(replacement.chars())
        .chain(chars[range.upper_bound()..].iter().copied())
        .collect();
    let mut text = reformat(&modified, spec, validator);

    let extra_location_offset: isize = if typed_separator { 1 } else { 0 };

    let min_position = if replaces_placeholder {
        leading_run_end(original)
    } else {
        first_digit
    };
    let at_min_position = original_range.is_empty() && original_range.location == min_position;
    let min_location_offset: isize = if at_min_position || typed_separator {
        0
    } else {
        1
    };

    let grown = text.chars().count() as isize - chars.len() as isize;
    let length_diff = grown.max(min_location_offset);
    let location = original_range.location as isize + length_diff + extra_location_offset;
    let mut limited_location = location.min(cursor_max_position(&text) as isize);

    let replaced_separator = chars[range.location..range.upper_bound()].contains(&separator);
    if replaced_separator && !replacement.contains(separator) {
        let begin_position = cursor_begin_position(&text, spec.grouping_separator) as isize;
        if begin_position > 0 {
            limited_location = limited_location.min(begin_position);
        }
    }

    if typed_separator && spec.max_fraction_digits > 0 && !text.contains(separator) {
        // Keep the separator the user just typed until a fraction digit follows
        let position = cursor_max_position(&text);
        let mut pending: Vec<char> = text.chars().collect();
        pending.insert(position, separator);
        text = pending.into_iter().collect();
        limited_location = position as isize + 1;
    }

    finish(text, limited_location)
}
