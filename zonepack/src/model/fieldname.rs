//! column names shared by the published statistics sources and the
//! downloadable table schema.

/// zone identifier attribute, shared by every source and the boundary geodata
pub const ZONE: &str = "Zone";

/// human-readable zone name attribute found in the boundary geodata
pub const ZONE_NAME: &str = "ZoneName";

pub const COUNTIES: &str = "Counties";
pub const CITIES: &str = "Cities";

/// deep link into the public map site for the row's zone
pub const URL: &str = "URL";

pub const SEX: &str = "Sex";
pub const CANCER: &str = "Cancer";
pub const YEARS: &str = "Years";

pub const POP_TOT: &str = "PopTot";
pub const AAIR: &str = "AAIR";
pub const LCI: &str = "LCI";
pub const UCI: &str = "UCI";

pub const WHITE_POP_TOT: &str = "White_PopTot";
pub const WHITE_AAIR: &str = "White_AAIR";
pub const WHITE_LCI: &str = "White_LCI";
pub const WHITE_UCI: &str = "White_UCI";

pub const BLACK_POP_TOT: &str = "Black_PopTot";
pub const BLACK_AAIR: &str = "Black_AAIR";
pub const BLACK_LCI: &str = "Black_LCI";
pub const BLACK_UCI: &str = "Black_UCI";

pub const HISPANIC_POP_TOT: &str = "Hispanic_PopTot";
pub const HISPANIC_AAIR: &str = "Hispanic_AAIR";
pub const HISPANIC_LCI: &str = "Hispanic_LCI";
pub const HISPANIC_UCI: &str = "Hispanic_UCI";

pub const ASIAN_POP_TOT: &str = "Asian_PopTot";
pub const ASIAN_AAIR: &str = "Asian_AAIR";
pub const ASIAN_LCI: &str = "Asian_LCI";
pub const ASIAN_UCI: &str = "Asian_UCI";

/// neighborhood socioeconomic status quintile
pub const QNSES: &str = "QNSES";

/// total population across all demographic groups
pub const POP_ALL: &str = "PopAll";

pub const PER_RURAL: &str = "PerRural";
pub const PER_UNINSURED: &str = "PerUninsured";
pub const PER_FOREIGN_BORN: &str = "PerForeignBorn";
pub const PER_WHITE: &str = "PerWhite";
pub const PER_BLACK: &str = "PerBlack";
pub const PER_ASIAN: &str = "PerAsian";
pub const PER_HISPANIC: &str = "PerHispanic";

/// the published downloadable table schema, in column order. downstream
/// consumers key off this exact sequence, including the repeated trailing
/// PerAsian column, so any change here is a breaking change to the site.
pub const EXPORT_COLUMNS: [&str; 37] = [
    ZONE,
    COUNTIES,
    CITIES,
    URL,
    SEX,
    CANCER,
    YEARS,
    POP_TOT,
    AAIR,
    LCI,
    UCI,
    WHITE_POP_TOT,
    WHITE_AAIR,
    WHITE_LCI,
    WHITE_UCI,
    BLACK_POP_TOT,
    BLACK_AAIR,
    BLACK_LCI,
    BLACK_UCI,
    HISPANIC_POP_TOT,
    HISPANIC_AAIR,
    HISPANIC_LCI,
    HISPANIC_UCI,
    ASIAN_POP_TOT,
    ASIAN_AAIR,
    ASIAN_LCI,
    ASIAN_UCI,
    QNSES,
    POP_ALL,
    PER_RURAL,
    PER_UNINSURED,
    PER_FOREIGN_BORN,
    PER_WHITE,
    PER_BLACK,
    PER_ASIAN,
    PER_HISPANIC,
    PER_ASIAN,
];
