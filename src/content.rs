//! Static page copy. Everything the sections render comes from here.

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Title with a one-line explanation, used by the hero and staff panels.
pub struct Highlight {
    pub title: &'static str,
    pub desc: &'static str,
}

pub struct StatItem {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub points: &'static [&'static str],
    pub result: &'static str,
}

const RESULT_PREFIX: &str = "Tulemus: ";

impl Step {
    /// Result sentence without its "Tulemus: " lead-in, which the page
    /// renders as a bold label instead.
    pub fn outcome(&self) -> &'static str {
        self.result.strip_prefix(RESULT_PREFIX).unwrap_or(self.result)
    }
}

/// A typical objection and the reply to it.
pub struct Objection {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const BRAND: &str = "EelPohak";
pub const BRAND_TAGLINE: &str = "Ohutusjuhtumid · järeltegevused · auditivalmidus";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Kuidas töötab", href: "#kuidas" },
    NavLink { label: "Miks personal kasutab", href: "#personal" },
    NavLink { label: "Kellele sobib", href: "#sobivus" },
    NavLink { label: "Kliiniku info", href: "#kontakt" },
];

pub const FOOTER_LINKS: &[NavLink] = &[
    NavLink { label: "Probleem", href: "#probleem" },
    NavLink { label: "Kuidas töötab", href: "#kuidas" },
    NavLink { label: "Kliiniku info", href: "#kontakt" },
];

pub const HERO_BULLETS: &[Highlight] = &[
    Highlight {
        title: "Kõik juhtumid ja järeltegevused ühes kohas",
        desc: "Mitte e-kirjades, Excelites või mälus.",
    },
    Highlight {
        title: "Selge vastutus ja nähtav staatus igal sammul",
        desc: "On alati teada, kes teeb mida ja millal.",
    },
    Highlight {
        title: "Valmis auditiks ja järelepäringuteks",
        desc: "Kogu protsess on dokumenteeritud ja leitav.",
    },
];

pub const HERO_STATS: &[StatItem] = &[
    StatItem { label: "Fookus", value: "Järeltegevused" },
    StatItem { label: "Prioriteet", value: "Riskihinnang" },
    StatItem { label: "Tõendatavus", value: "Auditivalmidus" },
    StatItem { label: "Tööjaotus", value: "Delegeeritav" },
];

pub const PROBLEMS: &[&str] = &[
    "Juhtumid jõuavad juhini eri kanalitest",
    "Osa infot jääb kirja panemata või kaob",
    "Järeltegevused venivad või ununevad",
    "Vastutus ei ole alati selge",
    "Auditi või kaebuse korral on raske näidata, mis tegelikult tehti",
    "Personal ei näe alati raporteerimise mõtet",
];

pub const IMPROVEMENTS: &[&str] = &[
    "Kanalid asenduvad ühe menetluskeskkonnaga",
    "Igal juhtumil on staatus, ajalugu ja vastutus",
    "Riskihinnang aitab prioritiseerida",
    "Tegevusplaanid ja tegevused ei “haju” laiali",
    "Audit ja järelepäringud on lihtsamini tõendatavad",
    "Tagasiside jõuab raporteerijani (ja vajadusel patsiendini)",
];

pub const STEPS: &[Step] = &[
    Step {
        number: 1,
        title: "Juhtum raporteeritakse kliinikus",
        points: &[
            "Ohutusjuhtum sisestatakse turvaliselt EelPohakusse sisse logides",
            "või otse patsiendi vaatest eKliinikus või Perearst 3 programmis",
            "Raporteerimine on kiire ja küsib ainult olulist.",
        ],
        result: "Tulemus: juhtum ei jää rääkimata ega lükku edasi.",
    },
    Step {
        number: 2,
        title: "Juhtum menetletakse asutuse siseselt",
        points: &[
            "Kliinik analüüsib juhtumit ja hindab riski ning korduvust",
            "Koostab tegevusplaani ning dokumenteerib otsused ja järeltegevused",
            "Kõik toimub asutuse sees, ilma automaatse edastamiseta riiklikku andmebaasi.",
        ],
        result: "Tulemus: kliinikul säilib kontroll ja ülevaade.",
    },
    Step {
        number: 3,
        title: "Süsteem aitab otsustada, mis on päriselt oluline",
        points: &["Iga juhtum saab automaatse riskihinnangu ja prioriteedi."],
        result: "Tulemus: juht ei pea kõiki juhtumeid võrdselt käsitlema ega otsustama „tunnetuse pealt“.",
    },
    Step {
        number: 4,
        title: "Töö ja vastutus on delegeeritav",
        points: &[
            "Detailne analüüs ja tegevusplaanide koostamine saab toimuda spetsialistide või halduri toel",
            "Juhini jõuab kokkuvõte ja otsust vajavad punktid.",
        ],
        result: "Tulemus: juhi aeg kulub otsustamisele, mitte info tagaajamisele.",
    },
    Step {
        number: 5,
        title: "Vajadusel edastamine riiklikku süsteemi",
        points: &[
            "Kui juhtum vastab riikliku raporteerimise kriteeriumidele, teeb kliinik teadliku otsuse selle edastamiseks",
            "Vajalik info edastatakse POHAKi andmebaasi X-tee turvalise liidestuse kaudu",
            "Ainult nõutud ja anonümiseeritud kujul.",
        ],
        result: "Tulemus: vastavus nõuetele ilma lisariski ja käsitööta.",
    },
];

pub const STAFF_REASONS: &[Highlight] = &[
    Highlight {
        title: "Raporteerimine on kiire ja loogiline",
        desc: "Juhtumi sisestamine võtab paar minutit ja ei nõua pikki selgitusi.",
    },
    Highlight {
        title: "Raporteerija ei jää teadmatusse",
        desc: "On näha, et juhtumiga tegeletakse ja midagi päriselt juhtub.",
    },
    Highlight {
        title: "Ei ole süüdistamist ega näpuga näitamist",
        desc: "Fookus on lahendusel ja õppimisel, mitte inimesel.",
    },
    Highlight {
        title: "Igapäevatöö ei katke",
        desc: "Raporteerimine ei vii fookust patsienditöölt ära.",
    },
];

pub const OBJECTIONS: &[Objection] = &[
    Objection {
        question: "“Meil on juba liiga palju vorme.”",
        answer: "EelPohak asendab killustunud töö ühe selge protsessiga.",
    },
    Objection {
        question: "“Juht peab nagunii kõik ise läbi töötama.”",
        answer: "Analüüsi ja tegevusplaanide töö on delegeeritav.",
    },
    Objection {
        question: "“Raporteerimine võtab personalilt liiga palju aega.”",
        answer: "Raporteerija teeb ainult esmase sisestuse.",
    },
    Objection {
        question: "“Kõik jääb lõpuks Excelisse.”",
        answer: "Kõik juhtumid ja otsused on ühes süsteemis, koos ajalooga.",
    },
];

pub const FITS_WHEN: &[&str] = &[
    "vastutad kliiniku kvaliteedi ja ohutuse eest",
    "tahad, et midagi ei jää „õhku“",
    "vajad selget ülevaadet ja rahulikku kindlust",
];

pub const DOES_NOT_FIT_WHEN: &[&str] = &[
    "otsid suurt haigla- või kontsernilahendust",
    "tahad ainult statistikat, mitte järeltegevusi",
    "otsid ajutist või tasuta lahendust",
];

pub const WHY_CHOOSE: &[&str] = &[
    "Loodud esmatasandi kliinikutele, mitte haiglatele",
    "Keskendub järeltegevustele, mitte ainult raporteerimisele",
    "Säilitab kliiniku kontrolli info üle",
    "Toetab psühholoogilist turvalisust",
    "Kiire kasutuselevõtt, minimaalne koolitus",
];

pub const OUTCOMES: &[Highlight] = &[
    Highlight {
        title: "Mõõdetavus",
        desc: "Tegevuste staatus ja tähtaegade jälgimine, korduvuse vaade, analüütika.",
    },
    Highlight {
        title: "Rahulikum kindlustunne",
        desc: "Kui tuleb audit, kaebus või järelepäring: “siin on protsess ja tõendid”.",
    },
];

pub const AFTER_SUBMIT: &[&str] = &[
    "Selge soovitus: kas EelPohak sobib teie protsessiga",
    "Lühike ülevaade kasutuselevõtust ja rollidest",
    "Kui sobib: järgmised sammud (integreerimine, ligipääsud, koolitus)",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_numbered_in_order() {
        assert_eq!(STEPS.len(), 5);
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1);
            assert!(!step.points.is_empty(), "step {} has no points", step.number);
        }
    }

    #[test]
    fn test_step_results_have_prefix() {
        for step in STEPS {
            assert!(step.result.starts_with(RESULT_PREFIX), "{}", step.result);
            assert!(!step.outcome().starts_with("Tulemus"));
        }
        assert_eq!(STEPS[1].outcome(), "kliinikul säilib kontroll ja ülevaade.");
    }

    #[test]
    fn test_outcome_without_prefix_is_unchanged() {
        let step = Step {
            number: 9,
            title: "",
            points: &[],
            result: "juba ilma eesliiteta",
        };
        assert_eq!(step.outcome(), "juba ilma eesliiteta");
    }

    #[test]
    fn test_anchor_links_point_at_sections() {
        let anchors = ["#probleem", "#kuidas", "#personal", "#sobivus", "#kontakt"];
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS) {
            assert!(anchors.contains(&link.href), "unknown anchor {}", link.href);
        }
    }
}
