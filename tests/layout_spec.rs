mod setup;
use setup::*;

use texbox::{
    Atom, AtomKind, LayoutErrorKind, Measurement, Settings, SpanType, StyleProperty, StyleValue,
    atom::{Array, DelimClass, Genfrac, Limits, LinePosition, OpBody},
    build_common::{
        NULL_DELIMITER_SPACE, VListChild, VListElemAndShift, VListParam, make_span, make_v_list,
        row_raise,
    },
    decompose::decompose,
    delimiter::{DelimiterType, MAX_REPEAT_COUNT, custom_sized_delim, select_delimiter},
    layout,
    style::{ALL_STYLES, SCRIPTSCRIPT, SCRIPTSCRIPT_CRAMPED},
};

fn frac(numer: Vec<Atom>, denom: Vec<Atom>) -> Atom {
    Atom::new(AtomKind::Genfrac(Box::new(Genfrac {
        numer,
        denom,
        has_bar_line: true,
        bar_size: None,
        mathstyle: None,
        continuous: false,
        left_delim: None,
        right_delim: None,
    })))
}

fn pmatrix() -> Atom {
    let cell = |text: &str| vec![Atom::ord(text)];
    Atom::new(AtomKind::Array(Box::new(Array {
        rows: vec![vec![cell("1"), cell("2")], vec![cell("3"), cell("4")]],
        left_delim: Some("(".to_owned()),
        right_delim: Some(")".to_owned()),
        ..Array::default()
    })))
}

fn kitchen_sink() -> Vec<Atom> {
    vec![
        Atom::new(AtomKind::Op {
            body: OpBody::Symbol("\\sum".to_owned()),
            limits: Limits::Auto,
        })
        .with_sub(ords("i=0"))
        .with_sup(ords("n")),
        frac(vec![sqrt(ords("x"))], ords("2y")),
        Atom::bin("+"),
        left_right(
            vec![Atom::ord("a").with_sup(ords("2")).with_sub(ords("j"))],
            Some("("),
            Some(")"),
        ),
        Atom::rel("="),
        pmatrix(),
        Atom::new(AtomKind::Accent {
            accent: "\\hat".to_owned(),
            body: ords("g"),
        }),
        Atom::new(AtomKind::Line {
            position: LinePosition::Under,
            body: ords("y"),
        }),
        Atom::new(AtomKind::Rule {
            width: Measurement::em(0.5),
            height: Measurement::em(0.2),
            shift: Some(Measurement::em(-0.4)),
        }),
    ]
}

#[test]
fn a_box_tree() {
    it("should never report a negative height or depth", || {
        for root in [layout_default(&kitchen_sink())?, layout_text(&kitchen_sink())?] {
            for span in walk(&root) {
                assert!(span.height >= 0.0, "negative height in {:?}", span.classes);
                assert!(span.depth >= 0.0, "negative depth in {:?}", span.classes);
            }
        }
        Ok(())
    });

    it("should size an hlist from the maxima of its children", || {
        let ctx = root_ctx(true);
        let children = vec![
            decompose(&ctx, &Atom::ord("y"))?,
            decompose(&ctx, &frac(ords("1"), ords("2")))?,
            decompose(&ctx, &Atom::ord("x"))?,
        ];
        let height = children.iter().map(|c| c.height).fold(0.0, f64::max);
        let depth = children.iter().map(|c| c.depth).fold(0.0, f64::max);
        let width: f64 = children.iter().map(texbox::Span::outer_width).sum();
        let hlist = make_span(vec![], children, None);
        assert!(approx(hlist.height, height));
        assert!(approx(hlist.depth, depth));
        assert!(approx(hlist.width, width));
        Ok(())
    });

    it("should size a vlist from its shifted rows", || {
        let ctx = root_ctx(true);
        let shifted = |atom: &Atom, shift: f64| -> Result<VListElemAndShift, texbox::LayoutError> {
            Ok(VListElemAndShift::builder()
                .elem(decompose(&ctx, atom)?)
                .shift(shift)
                .build())
        };
        let vlist = make_v_list(
            VListParam::IndividualShift {
                children: vec![
                    shifted(&Atom::ord("y"), 0.8)?,
                    shifted(&frac(ords("a"), ords("b")), 0.0)?,
                    shifted(&Atom::ord("h"), -1.7)?,
                ],
            },
            &ctx,
        );
        let rows = vlist_rows(&vlist);
        assert_eq!(rows.len(), 3);
        let top = rows
            .iter()
            .map(|row| row_raise(row) + row.height)
            .fold(0.0, f64::max);
        let bottom = rows
            .iter()
            .map(|row| row.depth - row_raise(row))
            .fold(0.0, f64::max);
        assert!(approx(vlist.height, top));
        assert!(approx(vlist.depth, bottom));
        Ok(())
    });

    it("should put a strut spanning the list first", || {
        let root = layout_default(&kitchen_sink())?;
        let strut = &root.children()[0];
        assert!(strut.has_class("strut"));
        assert!(approx(strut.height, root.height));
        assert!(approx(strut.depth, root.depth));
        assert_eq!(
            strut.style.get(StyleProperty::Height),
            Some(&StyleValue::from(root.height + root.depth))
        );
        Ok(())
    });
}

#[test]
fn mathstyles() {
    it("should make cramping idempotent", || {
        for style in ALL_STYLES {
            assert_eq!(style.cramp().cramp(), style.cramp());
            assert!(style.cramp().cramped);
            assert_eq!(style.cramp().size, style.size);
        }
        Ok(())
    });

    it("should bottom out at scriptscript", || {
        assert_eq!(SCRIPTSCRIPT.sup(), SCRIPTSCRIPT);
        assert_eq!(SCRIPTSCRIPT_CRAMPED.sup(), SCRIPTSCRIPT_CRAMPED);
        assert_eq!(SCRIPTSCRIPT.sub(), SCRIPTSCRIPT_CRAMPED);
        Ok(())
    });
}

#[test]
fn delimiters() {
    it("should never pick a smaller representation for a taller request", || {
        let ctx = root_ctx(true);
        for delim in ["(", "[", "\\{", "|", "\\langle", "\\lfloor", "\\uparrow", "\\surd"] {
            let mut previous = 0;
            for step in 0..=60 {
                let height = f64::from(step) * 0.1;
                let rank = select_delimiter(delim, height, &ctx)
                    .map(DelimiterType::rank)
                    .unwrap_or_default();
                assert!(rank >= previous, "{delim} shrank at {height}");
                previous = rank;
            }
        }
        Ok(())
    });

    it("should never draw a shorter parenthesis for a taller request", || {
        let ctx = root_ctx(true);
        let mut previous = 0.0;
        for step in 0..=60 {
            let height = f64::from(step) * 0.1;
            let span = custom_sized_delim("(", height, false, &ctx, texbox::Mode::Math, &[]);
            let total = span.height + span.depth;
            assert!(total >= previous - 1e-9, "shrank at {height}");
            previous = total;
        }
        Ok(())
    });

    it("should fence an empty body with the smallest parentheses", || {
        let ctx = root_ctx(true);
        let root = layout_default(&[left_right(vec![], Some("("), Some(")"))])?;
        let minner = &body(&root)[0];
        assert_eq!(minner.span_type, Some(SpanType::Minner));
        let [open, close] = minner.children() else {
            panic!("expected exactly two fences");
        };
        assert_eq!(open.span_type, Some(SpanType::Mopen));
        assert_eq!(close.span_type, Some(SpanType::Mclose));

        // the request for an empty body is set by the axis alone
        let axis = ctx.metrics().axis_height;
        let request = (axis / 500.0 * 901.0).max(2.0 * axis - 5.0 / ctx.metrics().pt_per_em);
        assert!(matches!(
            select_delimiter("(", request, &ctx),
            Some(DelimiterType::Small(_))
        ));
        for fence in [open, close] {
            let total = fence.height + fence.depth;
            assert!(total >= request);
            assert!(total < 1.0);
        }
        Ok(())
    });

    it("should leave a null delimiter for a missing fence", || {
        let root = layout_default(&[left_right(ords("x"), Some("("), None)])?;
        let fences = body(&root)[0].children();
        assert!(!fences[0].has_class("nulldelimiter"));
        let last = &fences[fences.len() - 1];
        assert!(last.has_class("nulldelimiter"));
        assert_eq!(last.span_type, Some(SpanType::Mclose));
        assert!(approx(last.width, NULL_DELIMITER_SPACE));
        Ok(())
    });

    it("should degrade an unknown delimiter to empty space", || {
        let root = layout_default(&[left_right(ords("x"), Some("\\nonsense"), Some(")"))])?;
        assert!(body(&root)[0].children()[0].has_class("nulldelimiter"));
        Ok(())
    });

    it("should cap the pieces of a fence around a huge rule", || {
        let rule = Atom::new(AtomKind::Rule {
            width: Measurement::em(0.5),
            height: Measurement::em(1e300),
            shift: None,
        });
        let root = layout_default(&[left_right(vec![rule], Some("("), Some(")"))])?;
        let fences = body(&root)[0].children();
        for fence in [&fences[0], &fences[fences.len() - 1]] {
            assert!(fence.height.is_finite() && fence.depth.is_finite());
            let pieces = walk(fence).into_iter().filter(|span| span.text().is_some()).count();
            assert!(pieces <= MAX_REPEAT_COUNT + 2);
        }
        Ok(())
    });

    it("should reject a big delimiter of size 5", || {
        let atom = Atom::new(AtomKind::SizedDelim {
            delim: "(".to_owned(),
            size: 5,
            class: DelimClass::default(),
        });
        let err = layout_default(&[atom]).unwrap_err();
        assert_eq!(*err.kind, LayoutErrorKind::InvalidSizedDelimiter { size: 5 });
        Ok(())
    });
}

#[test]
fn vlists() {
    it("should read back the depth of a shifted list", || {
        let ctx = root_ctx(true);
        let y = decompose(&ctx, &Atom::ord("y"))?;
        for shift in [-1.0, -0.3, 0.0, 0.25, 2.0] {
            let vlist = make_v_list(
                VListParam::Shift {
                    amount: shift,
                    children: vec![
                        VListChild::elem(y.clone()),
                        VListChild::kern(0.1),
                        VListChild::elem(decompose(&ctx, &Atom::ord("x"))?),
                    ],
                },
                &ctx,
            );
            assert!(approx(vlist.depth, (y.depth + shift).max(0.0)), "shift {shift}");
        }
        Ok(())
    });
}

#[test]
fn scripts() {
    it("should raise the superscript of x^2 by at least sup2", || {
        let ctx = root_ctx(true);
        let root = layout_default(&[Atom::ord("x").with_sup(ords("2"))])?;
        let supsub = &body(&root)[0];
        let nucleus = &supsub.children()[0];
        let msupsub = find_class(supsub, "msupsub").expect("scripts");
        let raise = raises(&msupsub.children()[0])[0];
        let metrics = ctx.metrics();
        assert!(raise >= metrics.sup2.max(nucleus.height - metrics.sup_drop) - 1e-9);
        Ok(())
    });

    it("should raise the superscript of a tall nucleus above its top", || {
        let ctx = root_ctx(true);
        let atom = Atom::new(AtomKind::Group {
            body: vec![frac(ords("a"), ords("b"))],
        })
        .with_sup(ords("2"));
        let root = layout_default(&[atom])?;
        let supsub = &body(&root)[0];
        let nucleus = &supsub.children()[0];
        let msupsub = find_class(supsub, "msupsub").expect("scripts");
        let raise = raises(&msupsub.children()[0])[0];

        let sup_ctx = ctx.having_style(ctx.style.sup());
        let drop = sup_ctx.metrics().sup_drop * sup_ctx.size_multiplier;
        assert!(raise >= nucleus.height - drop - 1e-9);
        assert!(raise >= ctx.metrics().sup1 - 1e-9);
        Ok(())
    });

    it("should keep the class of the nucleus", || {
        let root = layout_default(&[Atom::rel("=").with_sub(ords("n"))])?;
        assert_eq!(body(&root)[0].span_type, Some(SpanType::Mrel));
        Ok(())
    });
}

#[test]
fn fractions() {
    it("should set a display fraction with num1 and a visible bar", || {
        let ctx = root_ctx(true);
        let root = layout_default(&[frac(ords("1"), ords("2"))])?;
        let mfrac = find_class(&root, "mfrac").expect("fraction");
        let rows = vlist_rows(&mfrac.children()[0]);
        assert_eq!(rows.len(), 3);
        assert!(row_raise(rows[2]) >= ctx.metrics().num1 - 1e-9);

        let bar = find_class(&root, "frac-line").expect("fraction bar");
        assert!(approx(bar.height, ctx.metrics().default_rule_thickness));
        Ok(())
    });
}

#[test]
fn radicals() {
    it("should size an outer radical past its inner radical", || {
        let ctx = root_ctx(true);
        let root = layout_default(&[sqrt(vec![sqrt(ords("x"))])])?;
        let outer = &body(&root)[0];
        let outer_delim = &outer.children()[0];
        let radicand_group = &vlist_rows(&outer.children()[1])[0].children()[0];
        let radicand = &radicand_group.children()[0];
        assert!(radicand.has_class("sqrt"));
        let inner_delim = &radicand.children()[0];

        let outer_total = outer_delim.height + outer_delim.depth;
        let inner_total = inner_delim.height + inner_delim.depth;
        assert!(outer_total > radicand.height + radicand.depth);
        assert!(outer_total >= inner_total);

        let rank = |height| select_delimiter("\\surd", height, &ctx).map(DelimiterType::rank);
        assert!(rank(outer_total) >= rank(inner_total));
        Ok(())
    });
}

#[test]
fn arrays() {
    it("should lay out a 2x2 pmatrix with one column gap", || {
        let ctx = root_ctx(true);
        let root = layout_default(&[pmatrix()])?;
        let array = &body(&root)[0];
        let [open, grid, close] = array.children() else {
            panic!("expected fences around the table");
        };
        assert_eq!(open.span_type, Some(SpanType::Mopen));
        assert_eq!(close.span_type, Some(SpanType::Mclose));

        let columns = grid
            .children()
            .iter()
            .filter(|col| col.has_class("col-align-c"))
            .count();
        assert_eq!(columns, 2);
        let gaps: Vec<_> = grid
            .children()
            .iter()
            .filter(|col| col.has_class("arraycolsep"))
            .collect();
        assert_eq!(gaps.len(), 1);
        assert!(approx(gaps[0].width, 2.0 * ctx.metrics().arraycolsep));

        let total = grid.height + grid.depth;
        for fence in [open, close] {
            assert!(fence.height + fence.depth >= 0.9 * total);
        }
        Ok(())
    });
}

#[test]
fn limits_and_errors() {
    it("should stop at the nesting bound", || {
        let mut atom = Atom::ord("x");
        for _ in 0..10 {
            atom = group(vec![atom]);
        }
        let settings = Settings::builder().max_depth(4).build();
        let err = layout(provider(), &settings, &[atom.clone()]).unwrap_err();
        assert_eq!(*err.kind, LayoutErrorKind::NestingTooDeep { limit: 4 });

        layout_default(&[atom])?;
        Ok(())
    });

    it("should lay out trees exactly as deep as the default bound", || {
        let limit = Settings::default().max_depth;
        let nest = |wrap: fn(Vec<Atom>) -> Atom, levels: usize| {
            (1..levels).fold(Atom::ord("x"), |atom, _| wrap(vec![atom]))
        };
        for wrap in [group as fn(Vec<Atom>) -> Atom, sqrt] {
            layout_default(&[nest(wrap, limit)])?;
            let err = layout_default(&[nest(wrap, limit + 1)]).unwrap_err();
            assert_eq!(*err.kind, LayoutErrorKind::NestingTooDeep { limit });
        }
        Ok(())
    });

    it("should use zero metrics for an unknown glyph", || {
        let root = layout_default(&[Atom::ord("\u{4e2d}"), Atom::ord("x")])?;
        let glyph = walk(&root)
            .into_iter()
            .find(|span| span.text() == Some("\u{4e2d}"))
            .expect("glyph");
        assert!(approx(glyph.height, 0.0));
        assert!(approx(glyph.depth, 0.0));
        assert!(approx(glyph.width, 0.0));
        assert!(root.height > 0.0);
        Ok(())
    });

    it("should paint everything in the initial color", || {
        let settings = Settings::builder().color("red".to_owned()).build();
        let root = layout(provider(), &settings, &ords("ab"))?;
        let red = StyleValue::from("red");
        assert!(walk(&root)
            .into_iter()
            .filter(|span| span.text().is_some())
            .all(|glyph| glyph.style.get(StyleProperty::Color) == Some(&red)));
        Ok(())
    });
}
