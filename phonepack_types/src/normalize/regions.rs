/// Assigned ITU-T E.164 country calling codes, in ascending order.
///
/// No code is a prefix of another, so a number's calling code is unambiguous.
pub const CALLING_CODES: &[u16] = &[
    1, 7, 20, 27, 30, 31, 32, 33, 34, 36, 39, 40, 41, 43, 44, 45, 46, 47, 48, 49, 51, 52, 53, 54,
    55, 56, 57, 58, 60, 61, 62, 63, 64, 65, 66, 81, 82, 84, 86, 90, 91, 92, 93, 94, 95, 98, 211,
    212, 213, 216, 218, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229, 230, 231, 232, 233, 234,
    235, 236, 237, 238, 239, 240, 241, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253,
    254, 255, 256, 257, 258, 260, 261, 262, 263, 264, 265, 266, 267, 268, 269, 290, 291, 297, 298,
    299, 350, 351, 352, 353, 354, 355, 356, 357, 358, 359, 370, 371, 372, 373, 374, 375, 376, 377,
    378, 379, 380, 381, 382, 383, 385, 386, 387, 389, 420, 421, 423, 500, 501, 502, 503, 504, 505,
    506, 507, 508, 509, 590, 591, 592, 593, 594, 595, 596, 597, 598, 599, 670, 672, 673, 674, 675,
    676, 677, 678, 679, 680, 681, 682, 683, 685, 686, 687, 688, 689, 690, 691, 692, 800, 808, 850,
    852, 853, 855, 856, 870, 878, 880, 881, 882, 883, 886, 888, 960, 961, 962, 963, 964, 965, 966,
    967, 968, 970, 971, 972, 973, 974, 975, 976, 977, 979, 992, 993, 994, 995, 996, 998,
];

/// The calling code that `digits` starts with, and its length in digits.
pub fn calling_code_prefix(digits: &str) -> Option<(u16, usize)> {
    if digits.starts_with('0') {
        return None;
    }
    (1..=3).find_map(|len| {
        let code = digits.get(..len)?.parse::<u16>().ok()?;
        CALLING_CODES.binary_search(&code).ok().map(|_| (code, len))
    })
}

/// Dialling conventions of one region.
#[derive(PartialEq, Eq, Debug)]
pub struct Region {
    pub iso_code: &'static str,
    pub country_code: u16,
    /// International direct dialling prefix.
    pub idd: &'static str,
    /// Dialled before a national number from within the region, and not part of it.
    pub trunk_prefix: Option<&'static str>,
}

const fn region(
    iso_code: &'static str,
    country_code: u16,
    idd: &'static str,
    trunk_prefix: Option<&'static str>,
) -> Region {
    Region {
        iso_code,
        country_code,
        idd,
        trunk_prefix,
    }
}

pub const REGIONS: &[Region] = &[
    region("AT", 43, "00", Some("0")),
    region("AU", 61, "0011", Some("0")),
    region("BE", 32, "00", Some("0")),
    region("BR", 55, "00", Some("0")),
    region("CA", 1, "011", Some("1")),
    region("CH", 41, "00", Some("0")),
    region("CN", 86, "00", Some("0")),
    region("DE", 49, "00", Some("0")),
    region("DK", 45, "00", None),
    region("ES", 34, "00", None),
    region("FI", 358, "00", Some("0")),
    region("FR", 33, "00", Some("0")),
    region("GB", 44, "00", Some("0")),
    region("HK", 852, "001", None),
    region("IE", 353, "00", Some("0")),
    region("IN", 91, "00", Some("0")),
    region("IT", 39, "00", None),
    region("JP", 81, "010", Some("0")),
    region("KR", 82, "001", Some("0")),
    region("MX", 52, "00", None),
    region("NL", 31, "00", Some("0")),
    region("NO", 47, "00", None),
    region("NZ", 64, "00", Some("0")),
    region("PL", 48, "00", None),
    region("PT", 351, "00", None),
    region("RU", 7, "810", Some("8")),
    region("SE", 46, "00", Some("0")),
    region("SG", 65, "000", None),
    region("US", 1, "011", Some("1")),
    region("ZA", 27, "00", Some("0")),
];

/// Case-insensitive.
pub fn find_region(iso_code: &str) -> Option<&'static Region> {
    REGIONS
        .iter()
        .find(|region| region.iso_code.eq_ignore_ascii_case(iso_code))
}
