//! Header names of the activity export, as they appear after whitespace trimming.

pub const OWNER: &str = "Owner";
pub const PRODUCT: &str = "Product or Service";
pub const AMOUNT: &str = "Sum of Amount ( Actual Value )(In INR)";
pub const CLIENT_TYPE: &str = "Number of CLIENT TYPE";
pub const MEETINGS: &str = "Number of meetings";
pub const ACTIVATION: &str = "Activation";
pub const SPECIFIC_TASK: &str = "Specific Task";

/// Every column the metrics pipeline reads. An upload missing any of them is rejected.
pub const REQUIRED: [&str; 7] = [
    OWNER,
    PRODUCT,
    AMOUNT,
    CLIENT_TYPE,
    MEETINGS,
    ACTIVATION,
    SPECIFIC_TASK,
];
