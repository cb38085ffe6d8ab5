/// Lowercase substring -> card label, checked in this order.
/// Note `earmore` (sic) never matches "earnmore".
pub const CARD_KEYWORDS: [(&str, &str); 10] = [
    ("visa-signature", "HSBC Visa Signature"),
    ("everymile", "HSBC EveryMile"),
    ("red", "HSBC Red"),
    ("mmpower", "MMPower"),
    ("wakuwaku", "Wakuwaku"),
    ("earmore", "EarnMORE"),
    ("smart", "SC Smart"),
    ("eminent", "DBS Eminent"),
    ("chill", "BOC Chill"),
    ("rewards", "Citi Rewards"),
];
