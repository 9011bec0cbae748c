/// Render pointer-chain offsets as a single display string.
///
/// Every offset gets a `0x` prefix unless it already has one; all groups are
/// joined in order with `", "`. Offsets are otherwise passed through untouched.
pub fn format_offsets(offsets: Option<&[Vec<String>]>) -> String {
    let Some(groups) = offsets else {
        return String::new();
    };

    groups
        .iter()
        .flatten()
        .map(|offset| {
            if offset.starts_with("0x") {
                offset.clone()
            } else {
                format!("0x{offset}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
