// SPDX-License-Identifier: GPL-3.0-only

//! Built-in keyboard variants.

use crate::layout::variant::KeyboardVariant;

/// Returns the two letter layouts shipped with the reference backend.
///
/// The primary layout carries the sixteen most frequent English letters, the
/// secondary (hold) layout the remaining letters plus digits `0` to `5`.
pub fn default_variants() -> Vec<KeyboardVariant> {
    vec![
        KeyboardVariant::new(
            ["E", "T", "A", "O", "I", "D", "C", "W"],
            ["N", "S", "H", "R", "L", "U", "M", "F"],
        ),
        KeyboardVariant::new(
            ["G", "Y", "P", "V", "X", "0", "1", "2"],
            ["B", "K", "J", "Q", "Z", "3", "4", "5"],
        ),
    ]
}
