use pernr::{Context, FormatOptions, ParseError, Pernr};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_result(input: &str, result: &Result<Pernr, ParseError>, ctx: &Context, full_year: bool, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Parsing: \"{}\"", input.trim()), ansi::CYAN)));

    let pnr = match result {
        Ok(pnr) => pnr,
        Err(err) => {
            println!("  {}", palette.paint(format!("✗ {err}"), ansi::RED));
            return;
        }
    };

    println!("\n{}", palette.paint("━━━ Fields ━━━", ansi::GRAY));
    let birth_date = pnr.birth_date();
    let calendar_note = if birth_date.to_naive_date().is_some() { String::new() } else { palette.dim(" (not a calendar date)") };
    print_field(&palette, "birth date", palette.paint(birth_date.to_string(), ansi::GREEN) + &calendar_note);
    print_field(&palette, "serial", palette.paint(pnr.serial(), ansi::YELLOW));
    print_field(
        &palette,
        "region",
        match pnr.region() {
            Some(region) => palette.paint(region.name(), ansi::BLUE),
            None => palette.dim("none"),
        },
    );
    print_field(&palette, "gender", palette.paint(pnr.gender().as_str(), ansi::BLUE));
    print_field(
        &palette,
        "checksum",
        if pnr.is_valid() { palette.paint("✓ valid", ansi::GREEN) } else { palette.paint("✗ invalid", ansi::RED) },
    );

    println!("\n{}", palette.paint("━━━ Formatted ━━━", ansi::GRAY));
    let compact = pnr.format_with(ctx, &FormatOptions { full_year: false });
    let extended = pnr.format_with(ctx, &FormatOptions { full_year: true });
    if full_year {
        print_field(&palette, "extended", palette.bold(palette.paint(extended, ansi::GREEN)));
        print_field(&palette, "compact", palette.dim(compact));
    } else {
        print_field(&palette, "compact", palette.bold(palette.paint(compact, ansi::GREEN)));
        print_field(&palette, "extended", palette.dim(extended));
    }
    println!("  {}", palette.dim(format!("reference date {}", ctx.reference_date)));
}

fn print_field(palette: &ansi::Palette, label: &str, value: String) {
    println!("  {} {}", palette.dim(format!("{label:<11}│")), value);
}
