use serde::{Deserialize, Serialize};

/// Nine answer codes collected by the audit quiz.
///
/// Every code indexes an option list owned by the form. Codes outside a lookup table's
/// range are tolerated and resolve to that table's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditAnswers {
    pub is_owner: u32,
    #[serde(rename = "hasCRM")]
    pub has_crm: u32,
    pub has_sales_team: u32,
    pub social_media: u32,
    pub niche: u32,
    pub ad_platform: u32,
    pub revenue_goal: u32,
    pub average_check: u32,
    pub conversion_rate: u32,
}

/// Questions in the order the form presents them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Question {
    IsOwner,
    HasCrm,
    HasSalesTeam,
    SocialMedia,
    Niche,
    AdPlatform,
    RevenueGoal,
    AverageCheck,
    ConversionRate,
}

impl Question {
    pub const ALL: [Question; 9] = [
        Question::IsOwner,
        Question::HasCrm,
        Question::HasSalesTeam,
        Question::SocialMedia,
        Question::Niche,
        Question::AdPlatform,
        Question::RevenueGoal,
        Question::AverageCheck,
        Question::ConversionRate,
    ];

    /// Message key used by the form's string catalog (`q1`..`q9`).
    pub fn key(self) -> &'static str {
        match self {
            Question::IsOwner => "q1",
            Question::HasCrm => "q2",
            Question::HasSalesTeam => "q3",
            Question::SocialMedia => "q4",
            Question::Niche => "q5",
            Question::AdPlatform => "q6",
            Question::RevenueGoal => "q7",
            Question::AverageCheck => "q8",
            Question::ConversionRate => "q9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Question::IsOwner => "Business owner",
            Question::HasCrm => "CRM usage",
            Question::HasSalesTeam => "Sales team",
            Question::SocialMedia => "Social media presence",
            Question::Niche => "Niche",
            Question::AdPlatform => "Advertising platform",
            Question::RevenueGoal => "Monthly revenue goal",
            Question::AverageCheck => "Average check",
            Question::ConversionRate => "Conversion rate",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("expected {expected} responses, received {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("question {} ({}) has not been answered", .question.key(), .question.label())]
    Unanswered { question: Question },
}

impl AuditAnswers {
    /// Builds answers from the form's ordered response list, where `-1` marks a
    /// question that has not been answered yet.
    pub fn from_responses(responses: &[i32]) -> Result<Self, AnswerError> {
        if responses.len() != Question::ALL.len() {
            return Err(AnswerError::WrongLength {
                expected: Question::ALL.len(),
                actual: responses.len(),
            });
        }

        let mut codes = [0u32; 9];
        for ((slot, &raw), question) in codes.iter_mut().zip(responses).zip(Question::ALL) {
            *slot = u32::try_from(raw).map_err(|_| AnswerError::Unanswered { question })?;
        }

        let [
            is_owner,
            has_crm,
            has_sales_team,
            social_media,
            niche,
            ad_platform,
            revenue_goal,
            average_check,
            conversion_rate,
        ] = codes;

        Ok(Self {
            is_owner,
            has_crm,
            has_sales_team,
            social_media,
            niche,
            ad_platform,
            revenue_goal,
            average_check,
            conversion_rate,
        })
    }

    /// Answer code for a single question.
    pub fn code(&self, question: Question) -> u32 {
        match question {
            Question::IsOwner => self.is_owner,
            Question::HasCrm => self.has_crm,
            Question::HasSalesTeam => self.has_sales_team,
            Question::SocialMedia => self.social_media,
            Question::Niche => self.niche,
            Question::AdPlatform => self.ad_platform,
            Question::RevenueGoal => self.revenue_goal,
            Question::AverageCheck => self.average_check,
            Question::ConversionRate => self.conversion_rate,
        }
    }

    pub(crate) fn lacks_crm(&self) -> bool {
        self.has_crm >= 1
    }

    pub(crate) fn lacks_sales_team(&self) -> bool {
        self.has_sales_team >= 1
    }

    pub(crate) fn weak_social_presence(&self) -> bool {
        self.social_media >= 2
    }

    pub(crate) fn runs_no_ads(&self) -> bool {
        self.ad_platform == NO_AD_PLATFORM
    }
}

/// Option code for "no advertising platform".
pub(crate) const NO_AD_PLATFORM: u32 = 4;
