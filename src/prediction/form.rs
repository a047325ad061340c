use serde::Serialize;

/// One of the four metrics collected by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    WeeklySelfStudyHours,
    AttendancePercentage,
    ClassParticipation,
    TotalScore,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::WeeklySelfStudyHours,
        FormField::AttendancePercentage,
        FormField::ClassParticipation,
        FormField::TotalScore,
    ];

    /// Wire name used in the request body.
    pub fn key(self) -> &'static str {
        match self {
            Self::WeeklySelfStudyHours => "weekly_self_study_hours",
            Self::AttendancePercentage => "attendance_percentage",
            Self::ClassParticipation => "class_participation",
            Self::TotalScore => "total_score",
        }
    }

    /// Caption shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::WeeklySelfStudyHours => "Weekly Self Study Hours",
            Self::AttendancePercentage => "Attendance Percentage",
            Self::ClassParticipation => "Class Participation (1–10)",
            Self::TotalScore => "Total Score (0–100)",
        }
    }
}

/// Raw text of the four inputs, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    weekly_self_study_hours: String,
    attendance_percentage: String,
    class_participation: String,
    total_score: String,
}

impl FormState {
    /// Current text of `field`.
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::WeeklySelfStudyHours => &self.weekly_self_study_hours,
            FormField::AttendancePercentage => &self.attendance_percentage,
            FormField::ClassParticipation => &self.class_participation,
            FormField::TotalScore => &self.total_score,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::WeeklySelfStudyHours => &mut self.weekly_self_study_hours,
            FormField::AttendancePercentage => &mut self.attendance_percentage,
            FormField::ClassParticipation => &mut self.class_participation,
            FormField::TotalScore => &mut self.total_score,
        }
    }

    /// Store `value` verbatim; no validation happens at edit time.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// First field left empty, in display order.
    pub fn first_missing(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .find(|field| self.value(*field).is_empty())
    }

    /// Coerce every field to a number for submission.
    ///
    /// Text that does not parse becomes `NaN`, which the JSON encoder writes as `null`.
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            weekly_self_study_hours: coerce(self.value(FormField::WeeklySelfStudyHours)),
            attendance_percentage: coerce(self.value(FormField::AttendancePercentage)),
            class_participation: coerce(self.value(FormField::ClassParticipation)),
            total_score: coerce(self.value(FormField::TotalScore)),
        }
    }

    /// Fields whose text does not parse as a number.
    pub fn unparsable_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|field| coerce(self.value(*field)).is_nan())
            .collect()
    }
}

fn coerce(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Body of `POST /predict`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredictionRequest {
    pub weekly_self_study_hours: f64,
    pub attendance_percentage: f64,
    pub class_participation: f64,
    pub total_score: f64,
}
