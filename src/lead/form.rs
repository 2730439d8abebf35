use super::dispatch::SubmitError;
use serde::Serialize;

/// Role of the person filling in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRole {
    ClinicManager,
    QualityOrSafetyLead,
    FamilyDoctor,
    HeadNurse,
    Administrator,
    Other,
}

impl ContactRole {
    pub const ALL: [ContactRole; 6] = [
        ContactRole::ClinicManager,
        ContactRole::QualityOrSafetyLead,
        ContactRole::FamilyDoctor,
        ContactRole::HeadNurse,
        ContactRole::Administrator,
        ContactRole::Other,
    ];

    /// Display label, also sent as the wire value.
    pub fn label(self) -> &'static str {
        match self {
            ContactRole::ClinicManager => "Kliiniku juht",
            ContactRole::QualityOrSafetyLead => "Kvaliteedi- või ohutusjuht",
            ContactRole::FamilyDoctor => "Perearst",
            ContactRole::HeadNurse => "Õendusjuht",
            ContactRole::Administrator => "Administraator",
            ContactRole::Other => "Muu",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClinicSize {
    UpToThree,
    FourToTen,
    ElevenToThirty,
    OverThirty,
    PartOfNetwork,
}

impl ClinicSize {
    pub const ALL: [ClinicSize; 5] = [
        ClinicSize::UpToThree,
        ClinicSize::FourToTen,
        ClinicSize::ElevenToThirty,
        ClinicSize::OverThirty,
        ClinicSize::PartOfNetwork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClinicSize::UpToThree => "1–3 töötajat",
            ClinicSize::FourToTen => "4–10 töötajat",
            ClinicSize::ElevenToThirty => "11–30 töötajat",
            ClinicSize::OverThirty => "Üle 30 töötaja",
            ClinicSize::PartOfNetwork => "Osa kliinikute võrgust",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Incident categories the clinic finds hardest to handle today.
///
/// Variant order is checklist order; selections are kept sorted by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HardCase {
    Medication,
    Documentation,
    NotificationDelay,
    Complaints,
    WorkOrganisation,
    Other,
}

impl HardCase {
    pub const ALL: [HardCase; 6] = [
        HardCase::Medication,
        HardCase::Documentation,
        HardCase::NotificationDelay,
        HardCase::Complaints,
        HardCase::WorkOrganisation,
        HardCase::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            HardCase::Medication => "Ravimitega seotud juhtumid",
            HardCase::Documentation => "Dokumenteerimise probleemid",
            HardCase::NotificationDelay => "Aja- või teavituse viivitused",
            HardCase::Complaints => "Kaebused või patsiendi rahulolematus",
            HardCase::WorkOrganisation => "Töökorralduse vead",
            HardCase::Other => "Muu (avatud väli)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }
}

/// Ambient browsing signals attached to every submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowserContext {
    pub user_agent: String,
    /// Referring page, empty when the visit had none.
    pub referrer: String,
}

/// JSON body posted to the lead endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub clinic_name: String,
    pub contact_person: String,
    pub role: String,
    pub email: String,
    pub clinic_size: String,
    pub hard_cases: Vec<String>,
    pub biggest_worry: String,
    pub user_agent: String,
    pub referrer: String,
}

/// Values echoed back to the visitor after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub clinic: String,
    pub contact: String,
    pub email: String,
    pub size: String,
    pub hard_cases: String,
    pub biggest_worry: String,
}

const EMPTY_MARK: &str = "—";

/// In-page state of the lead form for a single visit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub clinic_name: String,
    pub contact_person: String,
    pub role: Option<ContactRole>,
    pub email: String,
    pub clinic_size: Option<ClinicSize>,
    pub hard_cases: Vec<HardCase>,
    pub biggest_worry: String,
    pub submitted: bool,
    pub sending: bool,
}

impl LeadForm {
    /// All five required fields hold a value.
    pub fn can_submit(&self) -> bool {
        !self.clinic_name.trim().is_empty()
            && !self.contact_person.trim().is_empty()
            && self.role.is_some()
            && !self.email.trim().is_empty()
            && self.clinic_size.is_some()
    }

    pub fn is_selected(&self, case: HardCase) -> bool {
        self.hard_cases.contains(&case)
    }

    pub fn toggle_hard_case(&mut self, case: HardCase) {
        match self.hard_cases.binary_search(&case) {
            Ok(idx) => {
                self.hard_cases.remove(idx);
            }
            Err(idx) => self.hard_cases.insert(idx, case),
        }
    }

    /// Mark a dispatch as started and package the current values.
    ///
    /// Returns `None` when a required field is missing or a request is
    /// already in flight; nothing is changed in that case.
    pub fn begin_submission(&mut self, ctx: &BrowserContext) -> Option<LeadPayload> {
        if self.sending || !self.can_submit() {
            return None;
        }
        let (role, clinic_size) = (self.role?, self.clinic_size?);
        self.sending = true;

        Some(LeadPayload {
            clinic_name: self.clinic_name.clone(),
            contact_person: self.contact_person.clone(),
            role: role.label().to_string(),
            email: self.email.clone(),
            clinic_size: clinic_size.label().to_string(),
            hard_cases: self
                .hard_cases
                .iter()
                .map(|c| c.label().to_string())
                .collect(),
            biggest_worry: self.biggest_worry.clone(),
            user_agent: ctx.user_agent.clone(),
            referrer: ctx.referrer.clone(),
        })
    }

    /// Record the outcome of a dispatch. Field values are never touched.
    pub fn finish_submission(&mut self, outcome: &Result<(), SubmitError>) {
        self.sending = false;
        if outcome.is_ok() {
            self.submitted = true;
        }
    }

    pub fn confirmation(&self) -> Confirmation {
        let role = self.role.map(ContactRole::label).unwrap_or_default();
        let hard_cases = if self.hard_cases.is_empty() {
            EMPTY_MARK.to_string()
        } else {
            self.hard_cases
                .iter()
                .map(|c| c.label())
                .collect::<Vec<_>>()
                .join(", ")
        };
        let biggest_worry = if self.biggest_worry.trim().is_empty() {
            EMPTY_MARK.to_string()
        } else {
            self.biggest_worry.clone()
        };

        Confirmation {
            clinic: self.clinic_name.clone(),
            contact: format!("{} ({})", self.contact_person, role),
            email: self.email.clone(),
            size: self
                .clinic_size
                .map(ClinicSize::label)
                .unwrap_or_default()
                .to_string(),
            hard_cases,
            biggest_worry,
        }
    }

    /// "Fill again": back to the empty, editable form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> LeadForm {
        LeadForm {
            clinic_name: "Tervisekeskus OÜ".to_string(),
            contact_person: "Jaan Tamm".to_string(),
            role: Some(ContactRole::FamilyDoctor),
            email: "jaan@kliinik.ee".to_string(),
            clinic_size: Some(ClinicSize::FourToTen),
            ..Default::default()
        }
    }

    fn ctx() -> BrowserContext {
        BrowserContext {
            user_agent: "Mozilla/5.0 (test)".to_string(),
            referrer: String::new(),
        }
    }

    #[test]
    fn test_can_submit_every_required_combination() {
        // Each bit switches one required field between a value and blank
        for mask in 0u8..32 {
            let mut form = LeadForm::default();
            form.clinic_name = if mask & 1 != 0 { "Kliinik".into() } else { "   ".into() };
            form.contact_person = if mask & 2 != 0 { "Mari".into() } else { String::new() };
            form.role = (mask & 4 != 0).then_some(ContactRole::Other);
            form.email = if mask & 8 != 0 { "a@b.ee".into() } else { "\t".into() };
            form.clinic_size = (mask & 16 != 0).then_some(ClinicSize::UpToThree);
            assert_eq!(form.can_submit(), mask == 31, "mask {:05b}", mask);
        }
    }

    #[test]
    fn test_optional_fields_do_not_gate_submission() {
        let mut form = filled();
        assert!(form.can_submit());
        form.biggest_worry = "  ".to_string();
        form.toggle_hard_case(HardCase::Complaints);
        assert!(form.can_submit());
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut form = LeadForm::default();
        form.toggle_hard_case(HardCase::WorkOrganisation);
        form.toggle_hard_case(HardCase::Medication);
        let before = form.hard_cases.clone();

        for case in HardCase::ALL {
            form.toggle_hard_case(case);
            form.toggle_hard_case(case);
            assert_eq!(form.hard_cases, before, "toggle of {:?}", case);
        }
    }

    #[test]
    fn test_selection_kept_in_checklist_order() {
        let mut form = LeadForm::default();
        form.toggle_hard_case(HardCase::Other);
        form.toggle_hard_case(HardCase::Documentation);
        form.toggle_hard_case(HardCase::Medication);
        assert_eq!(
            form.hard_cases,
            vec![HardCase::Medication, HardCase::Documentation, HardCase::Other]
        );
        assert!(form.is_selected(HardCase::Other));
        assert!(!form.is_selected(HardCase::Complaints));
    }

    #[test]
    fn test_payload_with_empty_optionals() {
        let mut form = filled();
        let payload = form.begin_submission(&ctx()).expect("form is complete");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["clinicName"], "Tervisekeskus OÜ");
        assert_eq!(json["contactPerson"], "Jaan Tamm");
        assert_eq!(json["role"], "Perearst");
        assert_eq!(json["email"], "jaan@kliinik.ee");
        assert_eq!(json["clinicSize"], "4–10 töötajat");
        assert_eq!(json["hardCases"], serde_json::json!([]));
        assert_eq!(json["biggestWorry"], "");
        assert_eq!(json["userAgent"], "Mozilla/5.0 (test)");
        assert_eq!(json["referrer"], "");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn test_begin_submission_requires_complete_form() {
        let mut form = filled();
        form.email = "  ".to_string();
        let before = form.clone();
        assert!(form.begin_submission(&ctx()).is_none());
        assert_eq!(form, before);
    }

    #[test]
    fn test_only_one_submission_in_flight() {
        let mut form = filled();
        assert!(form.begin_submission(&ctx()).is_some());
        assert!(form.sending);
        assert!(form.begin_submission(&ctx()).is_none());

        form.finish_submission(&Err(SubmitError::Network("offline".into())));
        assert!(!form.sending);
        assert!(form.begin_submission(&ctx()).is_some());
    }

    #[test]
    fn test_success_shows_confirmation() {
        let mut form = filled();
        form.toggle_hard_case(HardCase::Medication);
        form.begin_submission(&ctx()).unwrap();
        form.finish_submission(&Ok(()));

        assert!(form.submitted);
        assert_eq!(
            form.confirmation(),
            Confirmation {
                clinic: "Tervisekeskus OÜ".to_string(),
                contact: "Jaan Tamm (Perearst)".to_string(),
                email: "jaan@kliinik.ee".to_string(),
                size: "4–10 töötajat".to_string(),
                hard_cases: "Ravimitega seotud juhtumid".to_string(),
                biggest_worry: "—".to_string(),
            }
        );
    }

    #[test]
    fn test_confirmation_joins_cases_and_keeps_worry() {
        let mut form = filled();
        form.toggle_hard_case(HardCase::Complaints);
        form.toggle_hard_case(HardCase::Documentation);
        form.biggest_worry = "Järeltegevused ununevad".to_string();

        let summary = form.confirmation();
        assert_eq!(
            summary.hard_cases,
            "Dokumenteerimise probleemid, Kaebused või patsiendi rahulolematus"
        );
        assert_eq!(summary.biggest_worry, "Järeltegevused ununevad");
    }

    #[test]
    fn test_failure_keeps_fields_and_flag() {
        let mut form = filled();
        form.toggle_hard_case(HardCase::NotificationDelay);
        form.biggest_worry = "Aeg".to_string();
        let before = form.clone();

        form.begin_submission(&ctx()).unwrap();
        form.finish_submission(&Err(SubmitError::NoWindow));

        assert!(!form.submitted);
        assert_eq!(form, before);
    }

    #[test]
    fn test_reset_after_success() {
        let mut form = filled();
        form.toggle_hard_case(HardCase::Medication);
        form.biggest_worry = "Midagi".to_string();
        form.begin_submission(&ctx()).unwrap();
        form.finish_submission(&Ok(()));

        form.reset();
        assert_eq!(form, LeadForm::default());
        assert!(!form.submitted);
        assert!(!form.can_submit());
    }

    #[test]
    fn test_labels_round_trip() {
        for role in ContactRole::ALL {
            assert_eq!(ContactRole::from_label(role.label()), Some(role));
        }
        for size in ClinicSize::ALL {
            assert_eq!(ClinicSize::from_label(size.label()), Some(size));
        }
        for case in HardCase::ALL {
            assert_eq!(HardCase::from_label(case.label()), Some(case));
        }
        // The empty placeholder option means "nothing selected"
        assert_eq!(ContactRole::from_label(""), None);
        assert_eq!(ClinicSize::from_label("Valige"), None);
    }
}
