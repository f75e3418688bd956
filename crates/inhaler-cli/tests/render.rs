//! Rendering of directory queries and scale results.

use inhaler_cli::render::{rows_plain, rows_table, score_plain, scales_table};
use inhaler_model::{FilterSpec, Indication, InhalerRecord, columns};
use inhaler_query::run;
use inhaler_scoring::{CATALOG, ScoreSelection, wells};

fn directory() -> Vec<InhalerRecord> {
    vec![
        InhalerRecord::from_pairs([
            (columns::NAME, "Ventolin 100 microgramos/dosis suspensión"),
            (columns::ACTIVE_INGREDIENT, "SALBUTAMOL"),
            (columns::DEVICE, "Inhalador"),
            (columns::DEVICE_SUBTYPE, "pMDI"),
            (columns::TREATMENT_TYPE, "Mono"),
            (columns::ASTHMA, "Sí"),
            (columns::COPD, "Sí"),
            ("SABA", "Sí"),
            (columns::MARKETER, "GlaxoSmithKline"),
            (columns::DOSAGE_URL, "https://cima.aemps.es/ventolin"),
        ]),
        InhalerRecord::from_pairs([
            (columns::NAME, "Spiriva Respimat 2,5 microgramos"),
            (columns::ACTIVE_INGREDIENT, "TIOTROPIO"),
            (columns::DEVICE, "Respimat"),
            (columns::DEVICE_SUBTYPE, "Nebulizador"),
            (columns::TREATMENT_TYPE, "Mono"),
            (columns::ASTHMA, "No"),
            (columns::COPD, "Sí"),
            ("LAMA", "Sí"),
            (columns::MARKETER, "Boehringer Ingelheim"),
            (columns::DOSAGE_URL, "https://cima.aemps.es/spiriva"),
        ]),
    ]
}

#[test]
fn plain_rows_are_sorted_and_counted() {
    let result = run(&directory(), &FilterSpec::default());
    let rendered = rows_plain(&result).replace('\t', " | ");
    insta::assert_snapshot!(rendered, @r"
    SPIRIVA RESPIMAT 2,5 mcg | Tiotropio | Respimat | EPOC | Boehringer Ingelheim | https://cima.aemps.es/spiriva
    VENTOLIN 100 mcg/dosis suspensión | Salbutamol | Inhalador | Asma, EPOC | GlaxoSmithKline | https://cima.aemps.es/ventolin
    Resultados: 2
    ");
}

#[test]
fn table_puts_brand_and_dose_in_separate_columns() {
    let result = run(&directory(), &FilterSpec::default());
    let rendered = rows_table(&result).to_string();
    let spiriva = rendered
        .lines()
        .find(|line| line.contains("SPIRIVA RESPIMAT"))
        .expect("spiriva row");
    let cells: Vec<&str> = spiriva.split('│').map(str::trim).collect();
    assert!(cells.contains(&"SPIRIVA RESPIMAT"));
    assert!(cells.contains(&"2,5 mcg"));
    assert!(rendered.contains("Dosis"));
}

#[test]
fn plain_rows_report_empty_results() {
    let spec = FilterSpec::default().with_indication(Indication::Asma);
    let records: Vec<InhalerRecord> = directory()
        .into_iter()
        .filter(|record| record.get(columns::ASTHMA) != "Sí")
        .collect();
    let result = run(&records, &spec);
    assert_eq!(rows_plain(&result), "Resultados: 0");
}

#[test]
fn wells_score_plain_line() {
    let selection = ScoreSelection::from_toggles(["cancer", "dolor"]);
    let result = wells::SCALE.evaluate(&selection);
    assert_eq!(
        score_plain(&result),
        "2 puntos: TVP probabilidad intermedia (medium)"
    );
}

#[test]
fn wells_score_json() {
    let selection = ScoreSelection::from_toggles(["cancer", "dx_alternativo"]);
    let result = wells::SCALE.evaluate(&selection);
    insta::assert_json_snapshot!(result, @r#"
    {
      "score": -1,
      "interpretation": {
        "label": "TVP poco probable",
        "band": "low"
      }
    }
    "#);
}

#[test]
fn scales_table_lists_the_catalog() {
    let rendered = scales_table(CATALOG).to_string();
    for entry in CATALOG {
        assert!(rendered.contains(entry.id), "missing {}", entry.id);
    }
    assert!(rendered.contains("--scale-file"));
}
