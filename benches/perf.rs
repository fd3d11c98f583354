use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use serde::Deserialize;
use texbox::atom::Genfrac;
use texbox::{Atom, AtomKind, BuiltinMetrics, Settings, layout};

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    display: bool,
    atoms: Vec<Atom>,
}

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("benches/fixtures.yaml")
}

fn load_fixtures() -> Result<BTreeMap<String, Fixture>, Box<dyn Error>> {
    let file = File::open(fixture_path())?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}

/// `depth` fractions, each the numerator of the next.
fn nested_fractions(depth: usize) -> Vec<Atom> {
    (0..depth).fold(vec![Atom::ord("x")], |numer, _| {
        vec![Atom::new(AtomKind::Genfrac(Box::new(Genfrac {
            numer,
            denom: vec![Atom::ord("1"), Atom::bin("+"), Atom::ord("y")],
            has_bar_line: true,
            bar_size: None,
            mathstyle: None,
            continuous: false,
            left_delim: None,
            right_delim: None,
        })))]
    })
}

fn bench_layout(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let metrics = BuiltinMetrics::new();
    let mut fixtures = load_fixtures().expect("failed to load layout fixtures");
    fixtures.insert(
        "NestedFractions".to_owned(),
        Fixture {
            display: true,
            atoms: nested_fractions(12),
        },
    );

    let mut group = c.benchmark_group("texbox_layout");
    for (name, fixture) in &fixtures {
        let settings = Settings::builder().display_mode(fixture.display).build();

        // Ensure layout succeeds once before measuring performance.
        layout(&metrics, &settings, &fixture.atoms).expect("layout failed while priming");

        group.bench_function(name.as_str(), |b| {
            b.iter(|| {
                let root = layout(&metrics, &settings, black_box(&fixture.atoms))
                    .expect("layout failed during benchmark");
                black_box(root.height + root.depth);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
