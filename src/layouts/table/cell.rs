use crate::{
    document::PdfDocument,
    graphics::{size::RenderSize, LayerType, PdfPosition, TextBlock, TextBlockContent, TextLine, TextStyle},
    page::PdfPage,
    units::Pt,
    TuxPdfError,
};

/// Outcome of probing whether a cell's remaining content fits a budget, without
/// mutating the cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TryGenerateOutcome {
    /// Whether the cell's entire remaining content fits within `budget_height`.
    pub fits: bool,
    /// The height the cell's remaining content actually needs.
    pub required_height: Pt,
}

/// Outcome of actually writing a cell's content to a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateOutcome {
    /// The vertical space the written content occupied.
    pub consumed_height: Pt,
    /// Whether this call exhausted the cell's content (no continuation needed).
    pub complete: bool,
}

/// The payload a grid slot's owning entity carries.
///
/// Mirrors `graphics::text::TextBlock`'s own render contract rather than
/// inventing a new one: content is written directly against a concrete
/// `PdfDocument`/`PdfPage`, since this crate has no generic document trait.
pub trait TableCellElement {
    /// Height the cell's full content would need if given unlimited space.
    fn intrinsic_height(&self) -> Pt;
    /// Height the cell's *remaining* (not yet generated) content needs.
    ///
    /// Equal to [`Self::intrinsic_height`] until [`Self::generate`] has been
    /// called at least once.
    fn last_intrinsic_height(&self) -> Pt {
        self.intrinsic_height()
    }
    /// Checks whether the remaining content fits a budget without writing anything.
    fn try_generate(&self, budget_height: Pt) -> TryGenerateOutcome;
    /// Writes as much of the remaining content as fits in `budget_height`, starting
    /// at `position` with the given `width`.
    fn generate(
        &mut self,
        document: &PdfDocument,
        page: &mut PdfPage,
        position: PdfPosition,
        width: Pt,
        budget_height: Pt,
    ) -> Result<GenerateOutcome, TuxPdfError>;
    /// Whether `generate` has committed any output on the current page.
    ///
    /// Consulted by the Border Painter's needs-vline/downstream-straddle
    /// predicates (`spec.md` §4.5) in place of the height-delta heuristic the
    /// source relied on.
    fn produced_output(&self) -> bool {
        false
    }
    /// Clears any per-page "has emitted" state before a new page starts rendering.
    fn reset_page_state(&mut self) {}
}

/// A convenience [`TableCellElement`] wrapping the crate's existing text content
/// type, the same way the old non-spanning table's `TableValue::Text` did.
#[derive(Debug, Clone)]
pub struct TextCell {
    lines: Vec<TextLine>,
    line_heights: Vec<Pt>,
    style: TextStyle,
    next_line: usize,
    produced_output: bool,
}
impl TextCell {
    /// Measures `content` against `document`/`style` at `width` up front, since
    /// `TableCellElement::intrinsic_height` takes no document argument.
    pub fn new(
        document: &PdfDocument,
        content: impl Into<TextBlockContent>,
        mut style: TextStyle,
        width: Pt,
    ) -> Result<Self, TuxPdfError> {
        let mut content = content.into();
        style.max_width = Some(width);
        content.apply_max_width(width, document, &style)?;
        let mut line_heights = Vec::with_capacity(content.0.len());
        for line in content.0.iter() {
            line_heights.push(Self::measure_line(document, &style, line)?);
        }
        Ok(Self {
            lines: content.0,
            line_heights,
            style,
            next_line: 0,
            produced_output: false,
        })
    }
    fn measure_line(
        document: &PdfDocument,
        style: &TextStyle,
        line: &TextLine,
    ) -> Result<Pt, TuxPdfError> {
        let probe = TextBlockContent(vec![line.clone()]);
        Ok(probe.render_size(document, style)?.height)
    }
    fn remaining_heights(&self) -> &[Pt] {
        &self.line_heights[self.next_line..]
    }
}
impl TableCellElement for TextCell {
    fn intrinsic_height(&self) -> Pt {
        self.line_heights.iter().copied().sum()
    }
    fn last_intrinsic_height(&self) -> Pt {
        self.remaining_heights().iter().copied().sum()
    }
    fn try_generate(&self, budget_height: Pt) -> TryGenerateOutcome {
        let required_height = self.remaining_heights().iter().copied().sum();
        TryGenerateOutcome {
            fits: required_height <= budget_height,
            required_height,
        }
    }
    fn generate(
        &mut self,
        _document: &PdfDocument,
        page: &mut PdfPage,
        position: PdfPosition,
        width: Pt,
        budget_height: Pt,
    ) -> Result<GenerateOutcome, TuxPdfError> {
        let mut consumed_height = Pt::default();
        let mut count = 0usize;
        for height in self.remaining_heights() {
            if count > 0 && consumed_height + *height > budget_height {
                break;
            }
            consumed_height += *height;
            count += 1;
        }
        let written: Vec<TextLine> = self.lines[self.next_line..self.next_line + count].to_vec();
        self.next_line += count;
        let complete = self.next_line >= self.lines.len();

        if !written.is_empty() {
            let mut style = self.style.clone();
            style.max_width = Some(width);
            let text_block = TextBlock {
                content: TextBlockContent(written),
                style,
                position,
            };
            page.add_to_layer(text_block)?;
            self.produced_output = true;
        }

        Ok(GenerateOutcome {
            consumed_height,
            complete,
        })
    }
    fn produced_output(&self) -> bool {
        self.produced_output
    }
    fn reset_page_state(&mut self) {
        self.produced_output = false;
    }
}

#[cfg(test)]
pub(crate) struct TextCellStub {
    height: Pt,
}
#[cfg(test)]
impl TextCellStub {
    pub fn new(height: Pt) -> Self {
        Self { height }
    }
}
#[cfg(test)]
impl TableCellElement for TextCellStub {
    fn intrinsic_height(&self) -> Pt {
        self.height
    }
    fn try_generate(&self, budget_height: Pt) -> TryGenerateOutcome {
        TryGenerateOutcome {
            fits: self.height <= budget_height,
            required_height: self.height,
        }
    }
    fn generate(
        &mut self,
        _document: &PdfDocument,
        _page: &mut PdfPage,
        _position: PdfPosition,
        _width: Pt,
        _budget_height: Pt,
    ) -> Result<GenerateOutcome, TuxPdfError> {
        Ok(GenerateOutcome {
            consumed_height: self.height,
            complete: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_generate_reports_fit() {
        let cell = TextCellStub::new(Pt(30.0));
        assert!(cell.try_generate(Pt(40.0)).fits);
        assert!(!cell.try_generate(Pt(20.0)).fits);
    }
}
