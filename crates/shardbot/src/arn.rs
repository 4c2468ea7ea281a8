//! Amazon Resource Names.
//!
//! `arn:partition:service:region:account-id:resource`. Only the shape is checked; the
//! resource part may itself contain `:` and `/`.

const ARN_PREFIX: &str = "arn:";
const ARN_SECTIONS: usize = 6;

/// True when `s` starts with `arn:` and has at least six `:`-separated sections.
pub fn is_arn(s: &str) -> bool {
    s.starts_with(ARN_PREFIX) && s.matches(':').count() >= ARN_SECTIONS - 1
}

/// Everything after the last `/`, or the whole identifier when there is none.
pub fn stream_name_from_arn(arn: &str) -> &str {
    match arn.rfind('/') {
        Some(idx) => &arn[idx + 1..],
        None => arn,
    }
}
