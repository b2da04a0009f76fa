//! Column names of the LCA disclosure export.
//!
//! The raw file uses the uppercase headers of the Department of Labor
//! disclosure format. Derived columns added later in the pipeline are
//! lowercase so they can never collide with a raw header.

pub const CASE_STATUS: &str = "CASE_STATUS";
pub const RECEIVED_DATE: &str = "RECEIVED_DATE";
pub const VISA_CLASS: &str = "VISA_CLASS";
pub const QUARTER_DECISION: &str = "Quarter Decision";

pub const JOB_TITLE: &str = "JOB_TITLE";
pub const SOC_TITLE: &str = "SOC_TITLE";
pub const FULL_TIME_POSITION: &str = "FULL_TIME_POSITION";
pub const BEGIN_DATE: &str = "BEGIN_DATE";
pub const END_DATE: &str = "END_DATE";
pub const TOTAL_WORKER_POSITIONS: &str = "TOTAL_WORKER_POSITIONS";

pub const NEW_EMPLOYMENT: &str = "NEW_EMPLOYMENT";
pub const CONTINUED_EMPLOYMENT: &str = "CONTINUED_EMPLOYMENT";
pub const CHANGE_PREVIOUS_EMPLOYMENT: &str = "CHANGE_PREVIOUS_EMPLOYMENT";
pub const NEW_CONCURRENT_EMPLOYMENT: &str = "NEW_CONCURRENT_EMPLOYMENT";
pub const CHANGE_EMPLOYER: &str = "CHANGE_EMPLOYER";

pub const EMPLOYER_NAME: &str = "EMPLOYER_NAME";
pub const EMPLOYER_STATE: &str = "EMPLOYER_STATE";
pub const EMPLOYER_POC_CITY: &str = "EMPLOYER_POC_CITY";
pub const NAICS_CODE: &str = "NAICS_CODE";

pub const PREVAILING_WAGE: &str = "PREVAILING_WAGE";
pub const PW_UNIT_OF_PAY: &str = "PW_UNIT_OF_PAY";
pub const PW_WAGE_LEVEL: &str = "PW_WAGE_LEVEL";
/// Present in some dataset variants only.
pub const WAGE_UNIT_OF_PAY: &str = "WAGE_UNIT_OF_PAY";

pub const WORKSITE_CITY: &str = "WORKSITE_CITY";
pub const WORKSITE_STATE: &str = "WORKSITE_STATE";

pub const AGENT_REPRESENTING_EMPLOYER: &str = "AGENT_REPRESENTING_EMPLOYER";
pub const AGENT_ATTORNEY_FIRST_NAME: &str = "AGENT_ATTORNEY_FIRST_NAME";
pub const AGENT_ATTORNEY_CITY: &str = "AGENT_ATTORNEY_CITY";
pub const AGENT_ATTORNEY_STATE: &str = "AGENT_ATTORNEY_STATE";
pub const LAWFIRM_NAME_BUSINESS_NAME: &str = "LAWFIRM_NAME_BUSINESS_NAME";
pub const STATE_OF_HIGHEST_COURT: &str = "STATE_OF_HIGHEST_COURT";

/// Placeholder the export writes into agent, attorney, law-firm, and court
/// columns when no agent represented the employer.
pub const NO_AGENT: &str = "No Agent";

/// Date columns kept as strings by the loader; the normalizer parses them.
pub const DATE_COLUMNS: [&str; 3] = [RECEIVED_DATE, BEGIN_DATE, END_DATE];

/// Position counters, always summed across groupings.
pub const EMPLOYMENT_TYPE_COLUMNS: [&str; 5] = [
    NEW_EMPLOYMENT,
    CONTINUED_EMPLOYMENT,
    CHANGE_PREVIOUS_EMPLOYMENT,
    NEW_CONCURRENT_EMPLOYMENT,
    CHANGE_EMPLOYER,
];

pub const COUNTER_COLUMNS: [&str; 6] = [
    TOTAL_WORKER_POSITIONS,
    NEW_EMPLOYMENT,
    CONTINUED_EMPLOYMENT,
    CHANGE_PREVIOUS_EMPLOYMENT,
    NEW_CONCURRENT_EMPLOYMENT,
    CHANGE_EMPLOYER,
];

pub const WAGE_COLUMNS: [&str; 1] = [PREVAILING_WAGE];

/// Columns that read as numbers but are identifiers, kept as strings.
pub const CODE_COLUMNS: [&str; 1] = [NAICS_CODE];
