use crate::{Context, FEMALE, FormatOptions, Gender, MALE, ParseError, Region, parse, parse_with};
use chrono::NaiveDate;

fn ctx(y: i32, m: u32, d: u32) -> Context {
    Context { reference_date: NaiveDate::from_ymd_opt(y, m, d).unwrap() }
}

#[test]
fn malformed_and_invalid_date_errors() {
    assert!(matches!(parse("011x3544e095"), Err(ParseError::Malformed { .. })));
    assert!(matches!(parse("011354-4095"), Err(ParseError::InvalidBirthDate { .. })));
    assert_eq!(parse("011354-4095").unwrap_err().to_string(), "invalid birth date: 011354");
    assert_eq!(parse("abc").unwrap_err().to_string(), "could not parse identity number: abc");
}

#[test]
fn birth_dates() {
    // (input, year, month, day)
    let cases: Vec<(&str, i32, u32, u32)> = vec![
        ("010101-4095", 2001, 1, 1),
        ("990101-4498", 1999, 1, 1),
        ("010101+4095", 1901, 1, 1),
        ("20010101-4095", 2001, 1, 1),
        ("0101014095", 2001, 1, 1),
        ("200101014095", 2001, 1, 1),
        ("19010101+4095", 1901, 1, 1),
    ];

    for context in [Context::default(), ctx(2024, 6, 15)] {
        for &(input, year, month, day) in &cases {
            let date = parse_with(input, &context).unwrap_or_else(|e| panic!("{input}: {e}")).birth_date();
            assert_eq!((date.year(), date.month(), date.day()), (year, month, day), "{input}");
        }
    }
}

#[test]
fn reference_day_is_not_in_the_future() {
    let context = ctx(2024, 6, 15);
    assert_eq!(parse_with("240615-0000", &context).unwrap().birth_date().year(), 2024);
    assert_eq!(parse_with("240616-0000", &context).unwrap().birth_date().year(), 1924);
    assert_eq!(parse_with("240616+0000", &context).unwrap().birth_date().year(), 1824);
}

#[test]
fn day_overflow_is_kept_as_is() {
    let pnr = parse_with("800431-0000", &ctx(2024, 6, 15)).unwrap();
    assert_eq!((pnr.birth_date().month(), pnr.birth_date().day()), (4, 31));
    assert_eq!(pnr.format_with(&ctx(2024, 6, 15), &FormatOptions::default()), "800431-0000");
}

#[test]
fn regions() {
    let cases = vec![
        ("800101-0000", Region::Stockholm, "Stockholms län"),
        ("800101-1400", Region::Uppsala, "Uppsala län"),
        ("800101-1600", Region::Sodermanland, "Södermanlands län"),
        ("800101-1900", Region::Ostergotland, "Östergötlands län"),
        ("800101-2400", Region::Jonkoping, "Jönköpings län"),
        ("800101-2700", Region::Kronoberg, "Kronobergs län"),
        ("800101-2900", Region::Kalmar, "Kalmar län"),
        ("800101-3200", Region::Gotland, "Gotlands län"),
        ("800101-3300", Region::Blekinge, "Bleking län"),
        ("800101-3500", Region::Kristianstad, "Kristianstad län"),
        ("800101-3900", Region::Malmohus, "Malmöhus län"),
        ("800101-4600", Region::Halland, "Hallands län"),
        ("800101-4800", Region::GoteborgOchBohus, "Göteborgs och Bohus län"),
        ("800101-5500", Region::Alvsborg, "Älvsborgs län"),
        ("800101-5900", Region::Skaraborg, "Skaraborgs län"),
        ("800101-6200", Region::Varmland, "Värmlands län"),
        ("800101-6600", Region::Orebro, "Örebro län"),
        ("800101-6900", Region::Vastmanland, "Västmanlands län"),
        ("800101-7100", Region::Kopparberg, "Kopparbergs län"),
        ("800101-7500", Region::Gavleborg, "Gävleborgs län"),
        ("800101-7800", Region::Vasternorrland, "Västernorrland län"),
        ("800101-8200", Region::Jamtland, "Jämtlands län"),
        ("800101-8500", Region::Vasterbotten, "Västerbottens län"),
        ("800101-8900", Region::Norrbotten, "Norrbottens län"),
    ];

    for (input, region, name) in cases {
        let got = parse(input).unwrap().region();
        assert_eq!(got, Some(region), "{input}");
        assert_eq!(got.map(Region::name), Some(name), "{input}");
    }

    assert_eq!(parse("900101-4597").unwrap().region(), None);
    assert_eq!(parse("800101-6500").unwrap().region(), None);
}

#[test]
fn genders() {
    let male = parse("800101-8930").unwrap().gender();
    let female = parse("800101-8920").unwrap().gender();

    assert_eq!(male, Gender::Male);
    assert_eq!(female, Gender::Female);
    assert_eq!(male.as_str(), MALE);
    assert_eq!(female.to_string(), FEMALE);
}

#[test]
fn validation() {
    for input in ["010101-0101", "991231-0102", "111111-1111"] {
        assert!(!parse(input).unwrap().is_valid(), "{input} should be invalid");
    }
    for input in ["010101-4389", "010101-4405", "010101-4421"] {
        let pnr = parse(input).unwrap();
        assert!(pnr.is_valid(), "{input} should be valid");
        assert_eq!(pnr.is_valid(), pnr.is_valid());
    }
}

#[test]
fn formatting() {
    let compact = FormatOptions::default();
    let extended = FormatOptions { full_year: true };

    assert_eq!(parse("010101-0101").unwrap().format(&compact), "010101-0101");
    assert_eq!(parse("19100101-0101").unwrap().format(&compact), "100101+0101");
    assert_eq!(parse("010101-0101").unwrap().format(&extended), "20010101-0101");
    assert_eq!(parse("010101+0101").unwrap().format(&extended), "19010101+0101");
}

#[test]
fn formatted_output_parses_back() {
    let context = ctx(2024, 6, 15);
    let compact = FormatOptions::default();

    for input in ["010101-4389", "19100101-0101", "0101014095", "990101+4498", "200101014095"] {
        let pnr = parse_with(input, &context).unwrap();
        let once = pnr.format_with(&context, &compact);
        assert_eq!(once, pnr.format_with(&context, &compact), "{input}");

        let again = parse_with(&once, &context).unwrap();
        assert_eq!(again.birth_date(), pnr.birth_date(), "{input} -> {once}");
        assert_eq!(again.serial(), pnr.serial(), "{input} -> {once}");
    }
}
