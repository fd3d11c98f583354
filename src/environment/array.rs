//! Arrays and matrices
//!
//! Rows get an `\@arstrut` floor of `0.7` and `0.3` times
//! `arraystretch × baselineskip`. Every column is its own vlist, its cells
//! positioned against a common baseline so the table is centered on the
//! axis. The column format is walked once, emitting content columns, gaps
//! and vertical rules in order.

use crate::atom::{Array, Atom, ColumnAlign, ColumnSpec, Mode, StyleLevel};
use crate::build_common::{
    VListElemAndShift, VListParam, make_line_span, make_span, make_typed_span, make_v_list,
};
use crate::context::Context;
use crate::decompose::decompose_group;
use crate::functions::delimsizing::wrap_in_fences;
use crate::span::{Span, SpanType};
use crate::style::TEXT;
use crate::types::{LayoutError, StyleProperty};
use crate::units::calculate_size;

/// Vertical distance between doubled `\hline`s.
const HLINE_GAP: f64 = 0.25;

/// A row after folding, with what follows it.
#[derive(Debug)]
struct FoldedRow<'a> {
    cells: &'a [Vec<Atom>],
    gap: f64,
    hlines_after: &'a [bool],
}

/// A laid out row; `pos` is its baseline, measured down from the top of the
/// table.
#[derive(Debug)]
struct Outrow {
    cells: Vec<Option<Span>>,
    height: f64,
    depth: f64,
    pos: f64,
}

/// A horizontal rule, `pos` measured down from the top of the table.
#[derive(Debug, Clone, Copy)]
struct Hline {
    pos: f64,
    dashed: bool,
}

/// What the column format emitted last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Start,
    Content,
    Rule,
    Gap,
}

/// Split rows holding more cells than there are content columns; the
/// overflow continues on new rows. Gaps and rules after a row move to its
/// last piece.
fn fold_rows(array: &Array, ncols: usize) -> Vec<FoldedRow<'_>> {
    let mut out = Vec::with_capacity(array.rows.len());
    for (r, row) in array.rows.iter().enumerate() {
        let gap = array.row_gaps.get(r).copied().unwrap_or(0.0);
        let hlines_after = array
            .hlines_before_row
            .get(r + 1)
            .map_or(&[][..], Vec::as_slice);
        if ncols == 0 || row.len() <= ncols {
            out.push(FoldedRow {
                cells: row,
                gap,
                hlines_after,
            });
            continue;
        }
        log::trace!("folding row {r} of {} cells into rows of {ncols}", row.len());
        let pieces = row.len().div_ceil(ncols);
        for (i, cells) in row.chunks(ncols).enumerate() {
            let last = i + 1 == pieces;
            out.push(FoldedRow {
                cells,
                gap: if last { gap } else { 0.0 },
                hlines_after: if last { hlines_after } else { &[] },
            });
        }
    }
    out
}

fn set_hline_pos(hlines: &mut Vec<Hline>, total_height: &mut f64, in_gap: &[bool]) {
    for (i, &dashed) in in_gap.iter().enumerate() {
        if i > 0 {
            *total_height += HLINE_GAP;
        }
        hlines.push(Hline {
            pos: *total_height,
            dashed,
        });
    }
}

/// Horizontal space between columns.
fn col_gap(width: f64) -> Span {
    let mut gap = make_span(vec!["arraycolsep".to_owned()], vec![], None);
    gap.style.insert(StyleProperty::Width, width);
    gap.width = width;
    gap
}

const fn align_class(align: ColumnAlign) -> &'static str {
    match align {
        ColumnAlign::Left => "col-align-l",
        ColumnAlign::Center => "col-align-c",
        ColumnAlign::Right => "col-align-r",
    }
}

/// Lay out a matrix or array.
pub fn build(array: &Array, mode: Mode, ctx: &Context<'_>) -> Result<Span, LayoutError> {
    let metrics = ctx.metrics();

    let default_spec;
    let colspec: &[ColumnSpec] = if array.colspec.is_empty() {
        let ncols = array.rows.iter().map(Vec::len).max().unwrap_or(0);
        default_spec = vec![
            ColumnSpec::Align {
                align: ColumnAlign::Center,
                pregap: None,
                postgap: None,
            };
            ncols
        ];
        &default_spec
    } else {
        &array.colspec
    };
    let ncols = colspec
        .iter()
        .filter(|spec| matches!(spec, ColumnSpec::Align { .. }))
        .count();

    let cell_ctx = ctx.having_style(array.mathstyle.map_or(TEXT, StyleLevel::mathstyle));
    let rule_thickness = metrics.array_rule_width.max(ctx.min_rule_thickness);
    let arraycolsep = array.arraycolsep.unwrap_or(metrics.arraycolsep);
    let arrayskip = array.arraystretch.unwrap_or(1.0) * metrics.baselineskip;
    // \strutbox in ltfsstrc.dtx and \@arstrutbox in lttab.dtx
    let arstrut_height = 0.7 * arrayskip;
    let arstrut_depth = 0.3 * arrayskip;

    let mut body = vec![];
    let mut hlines = vec![];
    let mut total_height = 0.0;
    let first_hlines = array.hlines_before_row.first().map_or(&[][..], Vec::as_slice);
    set_hline_pos(&mut hlines, &mut total_height, first_hlines);

    for row in fold_rows(array, ncols) {
        let mut height = arstrut_height;
        let mut depth = arstrut_depth;
        let mut cells = Vec::with_capacity(row.cells.len());
        for cell in row.cells {
            let elem = decompose_group(&cell_ctx, ctx, cell)?;
            height = height.max(elem.height);
            depth = depth.max(elem.depth);
            cells.push(Some(elem));
        }

        let mut gap = row.gap;
        if gap > 0.0 {
            // \@argarraycr
            depth = depth.max(gap + arstrut_depth);
            gap = 0.0;
        }

        body.push(Outrow {
            cells,
            height,
            depth,
            pos: total_height + height,
        });
        total_height += height + depth + gap;
        set_hline_pos(&mut hlines, &mut total_height, row.hlines_after);
    }

    let offset = total_height / 2.0 + metrics.axis_height;
    let mut cols = vec![];
    let mut previous = Previous::Start;
    let mut pending_postgap = None;
    let mut c = 0;

    for spec in colspec {
        match spec {
            ColumnSpec::Separator { dashed } => {
                if let Some(postgap) = pending_postgap.take() {
                    cols.push(col_gap(postgap));
                } else if previous == Previous::Rule {
                    cols.push(col_gap(metrics.double_rule_sep));
                }
                let mut separator =
                    make_span(vec!["vertical-separator".to_owned()], vec![], Some(ctx));
                separator.style.insert(StyleProperty::Height, total_height);
                separator
                    .style
                    .insert(StyleProperty::BorderRightWidth, rule_thickness);
                separator.style.insert(
                    StyleProperty::BorderRightStyle,
                    if *dashed { "dashed" } else { "solid" },
                );
                separator.width = rule_thickness;
                separator.height = offset;
                separator.depth = (total_height - offset).max(0.0);
                cols.push(separator);
                previous = Previous::Rule;
            }
            ColumnSpec::Gap(width) => {
                pending_postgap = None;
                cols.push(col_gap(calculate_size(width, ctx)));
                previous = Previous::Gap;
            }
            ColumnSpec::Glue(material) => {
                pending_postgap = None;
                let mut children = Vec::with_capacity(body.len());
                for row in &body {
                    let elem = decompose_group(&cell_ctx, ctx, material)?;
                    children.push(
                        VListElemAndShift::builder()
                            .elem(elem)
                            .shift(row.pos - offset)
                            .build(),
                    );
                }
                let vlist = make_v_list(VListParam::IndividualShift { children }, ctx);
                cols.push(make_span(vec!["col-glue".to_owned()], vec![vlist], None));
                previous = Previous::Gap;
            }
            ColumnSpec::Align {
                align,
                pregap,
                postgap,
            } => {
                let pregap = pregap.unwrap_or(arraycolsep);
                let gap = match (pending_postgap.take(), previous) {
                    (Some(postgap), _) => postgap + pregap,
                    (None, Previous::Rule) => pregap,
                    (None, _) => 0.0,
                };
                if gap != 0.0 {
                    cols.push(col_gap(gap));
                }

                let mut children = vec![];
                for row in &mut body {
                    let Some(mut elem) = row.cells.get_mut(c).and_then(Option::take) else {
                        continue;
                    };
                    elem.height = row.height;
                    elem.depth = row.depth;
                    children.push(
                        VListElemAndShift::builder()
                            .elem(elem)
                            .shift(row.pos - offset)
                            .build(),
                    );
                }
                let vlist = make_v_list(VListParam::IndividualShift { children }, ctx);
                cols.push(make_span(vec![align_class(*align).to_owned()], vec![vlist], None));

                pending_postgap = Some(postgap.unwrap_or(arraycolsep));
                previous = Previous::Content;
                c += 1;
            }
        }
    }

    let mut table = make_span(vec!["mtable".to_owned()], cols, None);

    if !hlines.is_empty() {
        let width = table.width;
        let mut children = vec![VListElemAndShift::builder().elem(table).shift(0.0).build()];
        for hline in hlines.iter().rev() {
            let class = if hline.dashed { "hdashline" } else { "hline" };
            let mut line = make_line_span(class, ctx, Some(rule_thickness));
            line.width = width;
            children.push(
                VListElemAndShift::builder()
                    .elem(line)
                    .shift(hline.pos - offset)
                    .build(),
            );
        }
        let vlist = make_v_list(VListParam::IndividualShift { children }, ctx);
        table = make_span(vec!["mtable".to_owned()], vec![vlist], None);
    }

    let fenced = wrap_in_fences(
        table,
        array.left_delim.as_deref(),
        array.right_delim.as_deref(),
        mode,
        ctx,
    );
    Ok(make_typed_span(SpanType::Mord, vec![], fenced, ctx))
}
