//! Corpora bundled with the site.

use crate::record::CorpusRecord;

struct CatalogEntry {
    name: &'static str,
    language: &'static str,
    category: &'static str,
    period: &'static str,
    description: &'static str,
    repository: &'static str,
    size: Option<&'static str>,
}

const fn entry(
    name: &'static str,
    language: &'static str,
    category: &'static str,
    period: &'static str,
    description: &'static str,
    repository: &'static str,
    size: Option<&'static str>,
) -> CatalogEntry {
    CatalogEntry {
        name,
        language,
        category,
        period,
        description,
        repository,
        size,
    }
}

#[rustfmt::skip]
const CATALOG: &[CatalogEntry] = &[
    // Hebrew
    entry("bhsa", "Hebrew", "Biblical", "1000-200 BCE", "Biblia Hebraica Stuttgartensia Amstelodamensis", "https://github.com/ETCBC/bhsa", Some("1.1 GB")),
    entry("dss", "Hebrew", "Religious", "300 BCE-100 CE", "Dead Sea Scrolls", "https://github.com/ETCBC/dss", Some("936 MB")),
    entry("sp", "Hebrew", "Biblical", "516 BCE-70 CE", "Samaritan Pentateuch", "https://github.com/DT-UCPH/sp", Some("147 MB")),
    entry("extrabiblical", "Hebrew", "Historical", "200 BCE-200 CE", "Extra-biblical Hebrew texts", "https://github.com/ETCBC/extrabiblical", None),
    // Greek, biblical
    entry("lxx", "Greek", "Biblical", "300-100 BCE", "Septuagint (Rahlfs edition)", "https://github.com/CenterBLC/LXX", Some("268 MB")),
    entry("n1904", "Greek", "Biblical", "100-400 CE", "Nestle 1904 Greek New Testament", "https://github.com/CenterBLC/N1904", Some("319 MB")),
    entry("SBLGNT", "Greek", "Biblical", "100-400 CE", "SBL Greek New Testament", "https://github.com/CenterBLC/SBLGNT", None),
    entry("nestle1904", "Greek", "Biblical", "100-400 CE", "NT from LOWFAT-XML syntax trees", "https://github.com/ETCBC/nestle1904", None),
    entry("Nestle1904GBI", "Greek", "Biblical", "100-400 CE", "Nestle 1904 (tonyjurg)", "https://github.com/tonyjurg/Nestle1904GBI", None),
    entry("tischendorf_tf", "Greek", "Biblical", "100-400 CE", "Tischendorf 8th Edition Greek NT", "https://github.com/codykingham/tischendorf_tf", Some("34 MB")),
    entry("bible", "Greek", "Biblical", "300 BCE-400 CE", "Greek OT, NT, and extra-biblical", "https://github.com/pthu/bible", None),
    // Greek, classical and patristic
    entry("patristics", "Greek", "Religious", "100-500 CE", "Church Fathers", "https://github.com/pthu/patristics", None),
    entry("greek_literature", "Greek", "Literary", "400 BCE-400 CE", "Perseus & Open Greek texts", "https://github.com/pthu/greek_literature", None),
    entry("athenaeus", "Greek", "Literary", "80-170 CE", "Athenaeus' Deipnosophistae", "https://github.com/pthu/athenaeus", None),
    // Syriac
    entry("peshitta", "Syriac", "Biblical", "1000 BCE-900 CE", "Syriac Old Testament", "https://github.com/ETCBC/peshitta", Some("55 MB")),
    entry("syrnt", "Syriac", "Biblical", "0-1000 CE", "Syriac New Testament", "https://github.com/ETCBC/syrnt", Some("52 MB")),
    entry("syriac", "Syriac", "Religious", "Various", "Syriac texts collection", "https://github.com/ETCBC/syriac", None),
    // Arabic
    entry("quran", "Arabic", "Religious", "600-900 CE", "Quranic Arabic Corpus", "https://github.com/q-ran/quran", Some("73 MB")),
    entry("fusus", "Arabic", "Religious", "Medieval", "Ibn Arabi's Fusus Al Hikam", "https://github.com/among/fusus", None),
    // Aramaic
    entry("nena_tf", "Aramaic", "Historical", "Modern", "North Eastern Neo-Aramaic", "https://github.com/CambridgeSemiticsLab/nena_tf", None),
    // Cuneiform
    entry("uruk", "Proto-Cuneiform", "Historical", "4000-3100 BCE", "Archaic tablets from Uruk", "https://github.com/Nino-cunei/uruk", None),
    entry("oldassyrian", "Akkadian", "Historical", "2000-1600 BCE", "Old Assyrian documents", "https://github.com/Nino-cunei/oldassyrian", None),
    entry("oldbabylonian", "Akkadian", "Historical", "1900-1600 BCE", "Old Babylonian letters", "https://github.com/Nino-cunei/oldbabylonian", None),
    entry("ninmed", "Akkadian", "Historical", "ca. 800 BCE", "Medical Encyclopedia from Nineveh", "https://github.com/Nino-cunei/ninmed", None),
    // Ugaritic
    entry("cuc", "Ugaritic", "Historical", "1223-1172 BCE", "Copenhagen Ugaritic Corpus", "https://github.com/DT-UCPH/cuc", Some("1.6 MB")),
    // Pali
    entry("dhammapada", "Pali", "Religious", "300 BCE", "Ancient Buddhist verses", "https://github.com/ETCBC/dhammapada", None),
    // Latin
    entry("translatin-manif", "Latin", "Literary", "Early Modern", "Early modern Latin drama analysis", "https://github.com/HuygensING/translatin-manif", None),
    // Dutch
    entry("wp6-missieven", "Dutch", "Historical", "1600-1800 CE", "VOC General Missives", "https://github.com/CLARIAH/wp6-missieven", None),
    entry("wp6-daghregisters", "Dutch", "Historical", "1640-1641", "Batavia daily records", "https://github.com/CLARIAH/wp6-daghregisters", None),
    entry("wp6-ferdinandhuyck", "Dutch", "Literary", "1884", "Dutch novel by Jacob van Lennep", "https://github.com/CLARIAH/wp6-ferdinandhuyck", None),
    entry("mondriaan", "Dutch", "Historical", "1892-1923", "Piet Mondriaan letters", "https://github.com/annotation/mondriaan", None),
    // Multilingual
    entry("descartes-tf", "French/Latin/Dutch", "Historical", "1619-1650", "Descartes correspondence", "https://github.com/CLARIAH/descartes-tf", None),
    // Italian
    entry("suriano", "Italian", "Historical", "1616-1623", "Diplomatic correspondence", "https://github.com/HuygensING/suriano", None),
    // English
    entry("mobydick", "English", "Literary", "1851", "Herman Melville novel with NLP annotations", "https://github.com/annotation/mobydick", None),
    entry("banks", "English", "Literary", "1987", "Iain M. Banks' Consider Phlebas", "https://github.com/annotation/banks", None),
];

/// Materialize the bundled catalog in display order.
pub(crate) fn records() -> Vec<CorpusRecord> {
    CATALOG
        .iter()
        .map(|e| CorpusRecord {
            name: e.name.to_owned(),
            language: e.language.to_owned(),
            category: e.category.to_owned(),
            period: e.period.to_owned(),
            description: e.description.to_owned(),
            repository: e.repository.to_owned(),
            size: e.size.map(str::to_owned),
        })
        .collect()
}
