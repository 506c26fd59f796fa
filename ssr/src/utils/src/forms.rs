use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::profile::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormKind {
    Registration,
    Report,
}

impl FormKind {
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Registration => "Registration submitted. Thank you!",
            Self::Report => "Report submitted. Thank you!",
        }
    }
}

/// What the relay told us about a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelayOutcome {
    Accepted,
    Rejected,
}

/// Inline result line rendered under a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStatus {
    pub ok: bool,
    pub message: String,
}

impl FormStatus {
    pub fn invalid(err: FormError) -> Self {
        Self {
            ok: false,
            message: err.to_string(),
        }
    }

    pub fn from_outcome(kind: FormKind, outcome: RelayOutcome) -> Self {
        match outcome {
            RelayOutcome::Accepted => Self {
                ok: true,
                message: kind.success_message().to_string(),
            },
            RelayOutcome::Rejected => Self {
                ok: false,
                message: "Submission failed. Please try again.".to_string(),
            },
        }
    }

    pub fn unreachable() -> Self {
        Self {
            ok: false,
            message: "Submission failed. Please try again later.".to_string(),
        }
    }
}

/// The relay accepts either a 2xx status or a body flagging `success`
pub fn relay_accepted(status_ok: bool, body: &Value) -> bool {
    status_ok
        || matches!(
            body.get("success"),
            Some(Value::String(s)) if s == "true"
        )
        || matches!(body.get("success"), Some(Value::Bool(true)))
}

fn filled(field: &str) -> bool {
    !field.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// A form forwarded to the mail relay as a flat JSON object
pub trait RelayForm {
    type Payload: Serialize;

    const KIND: FormKind;

    fn required(&self) -> Vec<&str>;

    fn email(&self) -> &str;

    fn payload(&self) -> Self::Payload;

    fn validate(&self) -> Result<(), FormError> {
        if !self.required().into_iter().all(filled) {
            return Err(FormError::MissingRequired);
        }
        if !is_valid_email(self.email()) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub full_name: String,
    pub semester: String,
    pub email: String,
    pub codeforces: String,
    pub codechef: String,
    pub atcoder: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegistrationPayload {
    pub full_name: String,
    pub semester: String,
    pub email: String,
    pub codeforces: String,
    pub codechef: String,
    pub atcoder: String,
}

impl RelayForm for RegistrationForm {
    type Payload = RegistrationPayload;

    const KIND: FormKind = FormKind::Registration;

    fn required(&self) -> Vec<&str> {
        [&self.full_name, &self.semester, &self.email]
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            full_name: self.full_name.trim().to_string(),
            semester: self.semester.trim().to_string(),
            email: self.email.trim().to_string(),
            codeforces: self.codeforces.trim().to_string(),
            codechef: self.codechef.trim().to_string(),
            atcoder: self.atcoder.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheaterReport {
    pub reporter_name: String,
    pub reporter_email: String,
    pub cheater_handle: String,
    pub platform: Platform,
    pub contest_id: String,
    pub evidence: String,
    pub evidence_link: String,
}

impl Default for CheaterReport {
    fn default() -> Self {
        Self {
            reporter_name: String::new(),
            reporter_email: String::new(),
            cheater_handle: String::new(),
            platform: Platform::AtCoder,
            contest_id: String::new(),
            evidence: String::new(),
            evidence_link: String::new(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CheaterReportPayload {
    pub reporter_name: String,
    pub reporter_email: String,
    pub cheater_handle: String,
    pub platform: String,
    pub contest_id: String,
    pub evidence: String,
    pub evidence_link: String,
}

impl RelayForm for CheaterReport {
    type Payload = CheaterReportPayload;

    const KIND: FormKind = FormKind::Report;

    fn required(&self) -> Vec<&str> {
        [
            &self.reporter_name,
            &self.reporter_email,
            &self.cheater_handle,
            &self.contest_id,
        ]
        .into_iter()
        .map(String::as_str)
        .collect()
    }

    fn email(&self) -> &str {
        &self.reporter_email
    }

    fn payload(&self) -> CheaterReportPayload {
        CheaterReportPayload {
            reporter_name: self.reporter_name.trim().to_string(),
            reporter_email: self.reporter_email.trim().to_string(),
            cheater_handle: self.cheater_handle.trim().to_string(),
            platform: self.platform.label().to_string(),
            contest_id: self.contest_id.trim().to_string(),
            evidence: self.evidence.trim().to_string(),
            evidence_link: self.evidence_link.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            full_name: "Nusrat Jahan".into(),
            semester: "3.2".into(),
            email: "nusrat@aust.edu".into(),
            codeforces: " nusrat_cf ".into(),
            ..Default::default()
        }
    }

    #[test]
    fn registration_requires_name_semester_email() {
        assert_eq!(registration().validate(), Ok(()));
        let mut form = registration();
        form.semester = "   ".into();
        assert_eq!(form.validate(), Err(FormError::MissingRequired));
        assert_eq!(form.validate().unwrap_err().to_string(), "Please fill required fields.");
    }

    #[test]
    fn email_shape_is_checked_after_required_fields() {
        for bad in ["nusrat", "@aust.edu", "nusrat@", "nusrat@aust", "a b@aust.edu", "a@b@c.d"] {
            let mut form = registration();
            form.email = bad.into();
            assert_eq!(form.validate(), Err(FormError::InvalidEmail), "{bad}");
        }
        assert!(is_valid_email(" someone@mail.example.org "));
    }

    #[test]
    fn registration_payload_uses_relay_keys() {
        let value = serde_json::to_value(registration().payload()).unwrap();
        assert_eq!(
            value,
            json!({
                "FullName": "Nusrat Jahan",
                "Semester": "3.2",
                "Email": "nusrat@aust.edu",
                "Codeforces": "nusrat_cf",
                "Codechef": "",
                "Atcoder": ""
            })
        );
    }

    #[test]
    fn report_defaults_to_atcoder_and_needs_contest() {
        let mut report = CheaterReport {
            reporter_name: "Rafi".into(),
            reporter_email: "rafi@aust.edu".into(),
            cheater_handle: "sus".into(),
            ..Default::default()
        };
        assert_eq!(report.platform, Platform::AtCoder);
        assert_eq!(report.validate(), Err(FormError::MissingRequired));
        report.contest_id = "abc350".into();
        report.platform = Platform::CodeChef;
        assert_eq!(report.validate(), Ok(()));

        let value = serde_json::to_value(report.payload()).unwrap();
        assert_eq!(value["Platform"], "CodeChef");
        assert_eq!(value["ContestId"], "abc350");
        assert_eq!(value["EvidenceLink"], "");
        assert_eq!(value.as_object().map(|o| o.len()), Some(7));
    }

    #[test]
    fn relay_acceptance() {
        assert!(relay_accepted(true, &Value::Null));
        assert!(relay_accepted(false, &json!({"success": "true"})));
        assert!(relay_accepted(false, &json!({"success": true})));
        assert!(!relay_accepted(false, &json!({"success": "false", "message": "nope"})));
    }

    #[test]
    fn status_messages() {
        let ok = FormStatus::from_outcome(FormKind::Report, RelayOutcome::Accepted);
        assert!(ok.ok);
        assert_eq!(ok.message, "Report submitted. Thank you!");
        let refused = FormStatus::from_outcome(FormKind::Registration, RelayOutcome::Rejected);
        assert_eq!(refused.message, "Submission failed. Please try again.");
        assert_eq!(
            FormStatus::unreachable().message,
            "Submission failed. Please try again later."
        );
    }
}
