// tests/catalog_resolve.rs
//
// Tests for the catalog link resolver: which hrefs qualify, and the
// newest-year-wins replacement rule.
//
use baac_scope::core::html;
use baac_scope::specs::catalog::{qualify, resolve, split_stem, Winner};

const CATS: [&str; 4] = ["usagers", "vehicules", "lieux", "carcteristiques"];

fn page(hrefs: &[&str]) -> String {
    let mut doc = String::from("<html><body><section><ul>");
    for h in hrefs {
        doc.push_str("<li><a class=\"fr-link\" href=\"");
        doc.push_str(h);
        doc.push_str("\">download</a></li>");
    }
    doc.push_str("</ul></section></body></html>");
    doc
}

#[test]
fn newest_year_wins_per_category() {
    let doc = page(&[
        "https://static.data.gouv.fr/resources/r1/usagers-2021.csv",
        "https://static.data.gouv.fr/resources/r2/usagers-2022.csv",
        "https://static.data.gouv.fr/resources/r3/vehicules-2020.csv",
        "https://static.data.gouv.fr/resources/r4/notes.pdf",
    ]);
    let winners = resolve(&doc, &CATS);

    assert_eq!(winners.len(), 4);
    assert_eq!(winners[0].0, "usagers");
    assert_eq!(
        winners[0].1,
        Some(Winner {
            url: "https://static.data.gouv.fr/resources/r2/usagers-2022.csv".into(),
            year: 2022,
        })
    );
    assert_eq!(
        winners[1].1,
        Some(Winner {
            url: "https://static.data.gouv.fr/resources/r3/vehicules-2020.csv".into(),
            year: 2020,
        })
    );
    // Nothing on the page for these two
    assert_eq!(winners[2], ("lieux".to_string(), None));
    assert_eq!(winners[3], ("carcteristiques".to_string(), None));
}

#[test]
fn tie_keeps_the_first_link_seen() {
    // Same category, same year, two mirrors. Document order decides.
    let doc = page(&[
        "https://mirror-a.example/usagers-2022.csv",
        "https://mirror-b.example/usagers-2022.csv",
    ]);
    let winners = resolve(&doc, &CATS);

    let w = winners[0].1.as_ref().expect("usagers should resolve");
    assert_eq!(w.url, "https://mirror-a.example/usagers-2022.csv");
    assert_eq!(w.year, 2022);
}

#[test]
fn later_years_replace_regardless_of_order() {
    let doc = page(&[
        "https://x.example/lieux-2022.csv",
        "https://x.example/lieux-2005.csv",
        "https://x.example/lieux-2019.csv",
    ]);
    let winners = resolve(&doc, &CATS);
    assert_eq!(winners[2].1.as_ref().map(|w| w.year), Some(2022));
}

#[test]
fn page_noise_never_qualifies() {
    let doc = page(&[
        "https://x.example/usagers-2021.txt",      // wrong extension
        "https://x.example/usagers-recent.csv",    // year not digits
        "https://x.example/usagers-2021-old.csv",  // three stem parts
        "https://x.example/drivers-2021.csv",      // unknown label
        "https://x.example/usagers.csv",           // no year at all
        "https://x.example/usagers-.csv",          // empty year
        "https://www.data.gouv.fr/fr/datasets/",   // not a file
    ]);
    for (cat, w) in resolve(&doc, &CATS) {
        assert!(w.is_none(), "{cat} should not resolve from noise");
    }
}

#[test]
fn resolving_twice_gives_the_same_answer() {
    let doc = page(&[
        "https://x.example/vehicules-2021.csv",
        "https://x.example/vehicules-2022.csv",
        "https://x.example/usagers-2022.csv",
    ]);
    assert_eq!(resolve(&doc, &CATS), resolve(&doc, &CATS));
}

#[test]
fn anchors_survive_html_quirks() {
    // Single quotes, no quotes, uppercase tag and attribute.
    let doc = "\
        <A HREF=\"https://x.example/usagers-2022.csv\">a</A>\
        <a href='https://x.example/vehicules-2021.csv'>b</a>\
        <a href=https://x.example/lieux-2020.csv>c</a>";
    let winners = resolve(doc, &CATS);

    assert_eq!(winners[0].1.as_ref().map(|w| w.year), Some(2022));
    assert_eq!(winners[1].1.as_ref().map(|w| w.year), Some(2021));
    assert_eq!(winners[2].1.as_ref().map(|w| w.year), Some(2020));
}

#[test]
fn entity_encoded_hrefs_are_decoded() {
    let doc = "<a href=\"https://x.example/dl?id=7&amp;name=usagers-2022.csv\">x</a>";
    let hrefs = html::anchor_hrefs(doc);
    assert_eq!(hrefs, vec!["https://x.example/dl?id=7&name=usagers-2022.csv".to_string()]);
}

#[test]
fn qualify_matches_the_file_name_only() {
    assert_eq!(
        qualify("https://x.example/deep/path/carcteristiques-2022.csv", &CATS),
        Some(("carcteristiques", 2022))
    );
    // A category name in the path must not count
    assert_eq!(qualify("https://x.example/usagers-2022/readme.csv", &CATS), None);
    assert_eq!(qualify("usagers-2022.csv", &CATS), Some(("usagers", 2022)));
    assert_eq!(qualify("usagers-2022.CSV", &CATS), None); // extension is case-sensitive
}

#[test]
fn split_stem_cases() {
    assert_eq!(split_stem("usagers-2022"), Some(("usagers", 2022)));
    assert_eq!(split_stem("usagers-0007"), Some(("usagers", 7))); // leading zeros parse
    assert_eq!(split_stem("usagers"), None);
    assert_eq!(split_stem("usagers-"), None);
    assert_eq!(split_stem("usagers-20x2"), None);
    assert_eq!(split_stem("usagers-2021-old"), None);
    assert_eq!(split_stem("-2021"), Some(("", 2021))); // empty label; qualify rejects it
}
