use hxs_ir::Position;

/// Byte offset to line/column mapping for one source.
pub(crate) struct LineIndex<'src> {
    source: &'src str,
    /// Byte offset of the first character of each line.
    starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineIndex { source, starts }
    }

    /// Position of the byte at `offset`. Columns count characters.
    pub(crate) fn position(&self, offset: usize) -> Position {
        let line = self
            .starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let start = self.starts.get(line).copied().unwrap_or(0);
        let column = self
            .source
            .get(start..offset)
            .map_or(0, |text| text.chars().count());
        Position::new(line as u32 + 1, column as u32 + 1, offset as u32)
    }
}
