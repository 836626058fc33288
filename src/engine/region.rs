//! Historical county ("län") coding in the first two serial digits.
//!
//! Numbers issued from 1990 onwards no longer carry a birth region.

/// Last birth year whose serial encodes a region.
const LAST_REGIONAL_YEAR: i32 = 1989;

/// Birth county ("län") as it was coded before 1990.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Stockholm,
    Uppsala,
    Sodermanland,
    Ostergotland,
    Jonkoping,
    Kronoberg,
    Kalmar,
    Gotland,
    Blekinge,
    Kristianstad,
    Malmohus,
    Halland,
    GoteborgOchBohus,
    Alvsborg,
    Skaraborg,
    Varmland,
    Orebro,
    Vastmanland,
    Kopparberg,
    Gavleborg,
    Vasternorrland,
    Jamtland,
    Vasterbotten,
    Norrbotten,
}

/// Inclusive serial-prefix ranges, ascending and disjoint. 65, 74 and 93-99 are unassigned.
static REGIONS: &[(u32, u32, Region)] = &[
    (0, 13, Region::Stockholm),
    (14, 15, Region::Uppsala),
    (16, 18, Region::Sodermanland),
    (19, 23, Region::Ostergotland),
    (24, 26, Region::Jonkoping),
    (27, 28, Region::Kronoberg),
    (29, 31, Region::Kalmar),
    (32, 32, Region::Gotland),
    (33, 34, Region::Blekinge),
    (35, 38, Region::Kristianstad),
    (39, 45, Region::Malmohus),
    (46, 47, Region::Halland),
    (48, 54, Region::GoteborgOchBohus),
    (55, 58, Region::Alvsborg),
    (59, 61, Region::Skaraborg),
    (62, 64, Region::Varmland),
    (66, 68, Region::Orebro),
    (69, 70, Region::Vastmanland),
    (71, 73, Region::Kopparberg),
    (75, 77, Region::Gavleborg),
    (78, 81, Region::Vasternorrland),
    (82, 84, Region::Jamtland),
    (85, 88, Region::Vasterbotten),
    (89, 92, Region::Norrbotten),
];

impl Region {
    /// Historical county label, e.g. `"Stockholms län"`.
    pub fn name(self) -> &'static str {
        match self {
            Region::Stockholm => "Stockholms län",
            Region::Uppsala => "Uppsala län",
            Region::Sodermanland => "Södermanlands län",
            Region::Ostergotland => "Östergötlands län",
            Region::Jonkoping => "Jönköpings län",
            Region::Kronoberg => "Kronobergs län",
            Region::Kalmar => "Kalmar län",
            Region::Gotland => "Gotlands län",
            Region::Blekinge => "Bleking län",
            Region::Kristianstad => "Kristianstad län",
            Region::Malmohus => "Malmöhus län",
            Region::Halland => "Hallands län",
            Region::GoteborgOchBohus => "Göteborgs och Bohus län",
            Region::Alvsborg => "Älvsborgs län",
            Region::Skaraborg => "Skaraborgs län",
            Region::Varmland => "Värmlands län",
            Region::Orebro => "Örebro län",
            Region::Vastmanland => "Västmanlands län",
            Region::Kopparberg => "Kopparbergs län",
            Region::Gavleborg => "Gävleborgs län",
            Region::Vasternorrland => "Västernorrland län",
            Region::Jamtland => "Jämtlands län",
            Region::Vasterbotten => "Västerbottens län",
            Region::Norrbotten => "Norrbottens län",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn lookup(serial: &str, year: i32) -> Option<Region> {
    if year > LAST_REGIONAL_YEAR {
        return None;
    }

    let prefix: u32 = serial.get(..2)?.parse().ok()?;
    REGIONS.iter().find(|(low, high, _)| (*low..=*high).contains(&prefix)).map(|(_, _, region)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_disjoint() {
        for pair in REGIONS.windows(2) {
            let (_, prev_high, _) = pair[0];
            let (low, high, _) = pair[1];
            assert!(low <= high);
            assert!(prev_high < low, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn every_range_boundary_maps_to_its_region() {
        for &(low, high, region) in REGIONS {
            for prefix in [low, high] {
                let serial = format!("{prefix:02}00");
                assert_eq!(lookup(&serial, 1980), Some(region), "prefix {serial}");
            }
        }
    }

    #[test]
    fn unassigned_prefixes_have_no_region() {
        for serial in ["6500", "7400", "9300", "9999"] {
            assert_eq!(lookup(serial, 1980), None, "prefix {serial}");
        }
    }

    #[test]
    fn no_region_from_1990() {
        assert_eq!(lookup("0000", 1989), Some(Region::Stockholm));
        assert_eq!(lookup("0000", 1990), None);
        assert_eq!(lookup("8900", 2001), None);
    }

    #[test]
    fn names() {
        assert_eq!(Region::GoteborgOchBohus.to_string(), "Göteborgs och Bohus län");
        assert_eq!(Region::Norrbotten.name(), "Norrbottens län");
    }
}
