//! `.gitmodules` path extraction

/// Extract the submodule paths declared in a `.gitmodules` file.
///
/// Whitespace is removed from every line before matching, so
/// `\tpath = libs/zlib` and `path=libs/zlib` are equivalent. Only lines that
/// start with `path=` count; paths are returned in file order.
pub fn parse_submodule_paths(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| {
            line.chars()
                .filter(|c| !matches!(c, ' ' | '\t' | '\r' | '\n'))
                .collect::<String>()
        })
        .filter_map(|line| line.strip_prefix("path=").map(str::to_string))
        .filter(|path| !path.is_empty())
        .collect()
}
