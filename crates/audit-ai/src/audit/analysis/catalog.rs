use super::super::funnel::FunnelMetrics;
use super::super::locale::Locale;
use super::recommendations::RecommendationKind;
use super::template::{format_amount, format_roi, render};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Recommendation texts for one language. The loss alert takes `{loss}` and
/// `{yearlyLoss}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationTemplates {
    pub crm: &'static str,
    pub sales_team: &'static str,
    pub social_media: &'static str,
    pub advertising: &'static str,
    pub conversion: &'static str,
    pub loss_alert: &'static str,
    pub ready_to_scale: &'static str,
}

/// Everything the analyzer needs to speak one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub niche_names: Vec<&'static str>,
    pub platform_names: Vec<&'static str>,
    pub recommendations: RecommendationTemplates,
    pub strategy: [&'static str; 4],
    /// Takes `{niche}`, `{leads}`, and `{roi}`.
    pub summary: &'static str,
    pub thousands_separator: &'static str,
}

impl Translation {
    /// Display name for a niche code, or the code itself when the list has no entry.
    pub fn niche_name(&self, code: u32) -> String {
        name_or_code(&self.niche_names, code)
    }

    pub fn platform_name(&self, code: u32) -> String {
        name_or_code(&self.platform_names, code)
    }

    pub fn recommendation(&self, kind: RecommendationKind, metrics: &FunnelMetrics) -> String {
        let templates = &self.recommendations;
        match kind {
            RecommendationKind::Crm => templates.crm.to_string(),
            RecommendationKind::SalesTeam => templates.sales_team.to_string(),
            RecommendationKind::SocialMedia => templates.social_media.to_string(),
            RecommendationKind::Advertising => templates.advertising.to_string(),
            RecommendationKind::Conversion => templates.conversion.to_string(),
            RecommendationKind::LossAlert => {
                let loss = format_amount(metrics.potential_losses, self.thousands_separator);
                let yearly = format_amount(
                    metrics.potential_losses.saturating_mul(12),
                    self.thousands_separator,
                );
                render(
                    templates.loss_alert,
                    &[("loss", loss.as_str()), ("yearlyLoss", yearly.as_str())],
                )
            }
            RecommendationKind::ReadyToScale => templates.ready_to_scale.to_string(),
        }
    }

    pub fn strategy(&self) -> Vec<String> {
        self.strategy.iter().map(|phase| phase.to_string()).collect()
    }

    pub fn summary(&self, niche: u32, metrics: &FunnelMetrics) -> String {
        let niche = self.niche_name(niche);
        let leads = metrics.required_leads.to_string();
        let roi = format_roi(metrics);
        render(
            self.summary,
            &[
                ("niche", niche.as_str()),
                ("leads", leads.as_str()),
                ("roi", roi.as_str()),
            ],
        )
    }
}

fn name_or_code(names: &[&'static str], code: u32) -> String {
    usize::try_from(code)
        .ok()
        .and_then(|index| names.get(index))
        .map(|name| name.to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Translations keyed by locale with a fallback for locales missing from the map.
#[derive(Debug, Clone)]
pub struct LocaleCatalog {
    translations: HashMap<Locale, Translation>,
    fallback_locale: Locale,
    fallback: Translation,
}

impl LocaleCatalog {
    /// Returns `None` when `translations` has no entry for `fallback`.
    pub fn new(mut translations: HashMap<Locale, Translation>, fallback: Locale) -> Option<Self> {
        let fallback_translation = translations.remove(&fallback)?;
        Some(Self {
            translations,
            fallback_locale: fallback,
            fallback: fallback_translation,
        })
    }

    pub fn standard() -> Self {
        Self {
            translations: HashMap::from([(Locale::Ru, russian()), (Locale::Kg, kyrgyz())]),
            fallback_locale: Locale::En,
            fallback: english(),
        }
    }

    pub fn shared() -> Arc<Self> {
        static SHARED: OnceLock<Arc<LocaleCatalog>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(Self::standard())).clone()
    }

    pub fn translation(&self, locale: Locale) -> &Translation {
        self.translations.get(&locale).unwrap_or(&self.fallback)
    }

    /// Locales with their own templates, fallback first.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales = vec![self.fallback_locale];
        locales.extend(
            Locale::ALL
                .into_iter()
                .filter(|locale| self.translations.contains_key(locale)),
        );
        locales
    }
}

fn english() -> Translation {
    Translation {
        niche_names: vec![
            "E-commerce",
            "SaaS/IT",
            "Services",
            "Education",
            "Healthcare",
            "Other",
        ],
        platform_names: vec![
            "Google Ads",
            "Facebook/Instagram",
            "TikTok",
            "LinkedIn",
            "None",
            "Multiple",
        ],
        recommendations: RecommendationTemplates {
            crm: "Implement a CRM system (e.g., HubSpot, Bitrix24, amoCRM) to track every lead and customer interaction. Expected improvement: 20-30% in lead conversion.",
            sales_team: "Build or strengthen your sales team. A dedicated sales force can improve close rates by 25-40%.",
            social_media: "Develop a consistent social media strategy. Active presence on 2-3 key platforms can reduce customer acquisition cost by 15-25%.",
            advertising: "Launch paid advertising. Start with Google Ads and Meta (Facebook/Instagram) to build a predictable flow of leads.",
            conversion: "Focus on conversion rate optimization (CRO): A/B test landing pages, sharpen your calls to action, and track every step of the funnel.",
            loss_alert: "Closing the identified gaps could save ${loss}/month (${yearlyLoss}/year) in wasted marketing spend.",
            ready_to_scale: "Your marketing foundation is strong. Focus on scaling what works and testing new channels.",
        },
        strategy: [
            "Phase 1 (Month 1-2): Audit current campaigns, fix tracking, and connect every lead source to a CRM.",
            "Phase 2 (Month 2-4): Launch multi-channel lead generation and A/B test offers and landing pages.",
            "Phase 3 (Month 4-6): Scale the best-performing channels and automate follow-ups to lift conversion.",
            "Phase 4 (Month 6+): Implement retention programs and expand into new market segments for sustainable growth.",
        ],
        summary: "Based on your {niche} business profile, you need approximately {leads} leads per month to reach your revenue target. The estimated return on ad spend is {roi}x.",
        thousands_separator: ",",
    }
}

fn russian() -> Translation {
    Translation {
        niche_names: vec![
            "E-commerce",
            "SaaS/IT",
            "Услуги",
            "Образование",
            "Медицина",
            "Другое",
        ],
        platform_names: vec![
            "Google Ads",
            "Facebook/Instagram",
            "TikTok",
            "LinkedIn",
            "Нет",
            "Несколько",
        ],
        recommendations: RecommendationTemplates {
            crm: "Внедрите CRM-систему (например, Bitrix24, amoCRM или HubSpot), чтобы отслеживать каждый лид и контакт с клиентом. Ожидаемый рост конверсии лидов: 20-30%.",
            sales_team: "Создайте или усильте отдел продаж. Выделенная команда продаж повышает долю закрытых сделок на 25-40%.",
            social_media: "Выстройте последовательную стратегию в социальных сетях. Активное присутствие на 2-3 ключевых площадках снижает стоимость привлечения клиента на 15-25%.",
            advertising: "Запустите платную рекламу. Начните с Google Ads и Meta (Facebook/Instagram), чтобы получить предсказуемый поток заявок.",
            conversion: "Займитесь оптимизацией конверсии (CRO): проводите A/B-тесты посадочных страниц, усиливайте призывы к действию и отслеживайте каждый шаг воронки.",
            loss_alert: "Устранение выявленных пробелов может сэкономить ${loss} в месяц (${yearlyLoss} в год) на неэффективных расходах на маркетинг.",
            ready_to_scale: "У вашего маркетинга крепкий фундамент. Масштабируйте то, что работает, и тестируйте новые каналы.",
        },
        strategy: [
            "Этап 1 (1-2 месяц): проведите аудит текущих кампаний, настройте аналитику и подключите все источники заявок к CRM.",
            "Этап 2 (2-4 месяц): запустите многоканальное привлечение лидов и тестируйте офферы и посадочные страницы.",
            "Этап 3 (4-6 месяц): масштабируйте самые эффективные каналы и автоматизируйте повторные касания для роста конверсии.",
            "Этап 4 (6+ месяц): внедрите программы удержания и выходите на новые сегменты рынка для устойчивого роста.",
        ],
        summary: "Исходя из профиля вашего бизнеса ({niche}), вам нужно около {leads} лидов в месяц, чтобы достичь цели по выручке. Ожидаемая окупаемость рекламы: {roi}x.",
        thousands_separator: "\u{a0}",
    }
}

fn kyrgyz() -> Translation {
    Translation {
        niche_names: vec![
            "E-commerce",
            "SaaS/IT",
            "Кызматтар",
            "Билим берүү",
            "Саламаттык сактоо",
            "Башка",
        ],
        platform_names: vec![
            "Google Ads",
            "Facebook/Instagram",
            "TikTok",
            "LinkedIn",
            "Жок",
            "Бир нечеси",
        ],
        recommendations: RecommendationTemplates {
            crm: "Ар бир лидди жана кардар менен байланышты көзөмөлдөө үчүн CRM системасын (мисалы, Bitrix24, amoCRM же HubSpot) киргизиңиз. Лиддердин конверсиясы 20-30% га өсүшү күтүлөт.",
            sales_team: "Сатуу бөлүмүн түзүңүз же күчөтүңүз. Атайын сатуу командасы келишимдерди жабуу үлүшүн 25-40% га жогорулатат.",
            social_media: "Социалдык тармактарда туруктуу стратегия түзүңүз. 2-3 негизги аянтчада активдүү болуу кардар тартуу баасын 15-25% га төмөндөтөт.",
            advertising: "Акы төлөнүүчү жарнаманы баштаңыз. Туруктуу өтүнмөлөр агымын алуу үчүн Google Ads жана Meta (Facebook/Instagram) менен баштаңыз.",
            conversion: "Конверсияны оптималдаштырууга (CRO) көңүл буруңуз: баракчаларды A/B тесттен өткөрүп, чакырыктарды күчөтүп, воронканын ар бир кадамын көзөмөлдөңүз.",
            loss_alert: "Аныкталган кемчиликтерди жоюу маркетингдеги натыйжасыз чыгымдардан айына ${loss} (жылына ${yearlyLoss}) үнөмдөөгө жардам берет.",
            ready_to_scale: "Маркетингиңиздин пайдубалы бекем. Иштеген нерселерди масштабдап, жаңы каналдарды сынап көрүңүз.",
        },
        strategy: [
            "1-этап (1-2-ай): учурдагы кампанияларды текшерип, аналитиканы тууралап, бардык өтүнмө булактарын CRMге туташтырыңыз.",
            "2-этап (2-4-ай): көп каналдуу лид тартууну баштап, сунуштарды жана баракчаларды сынаңыз.",
            "3-этап (4-6-ай): эң натыйжалуу каналдарды масштабдап, конверсияны көтөрүү үчүн кайра байланышууну автоматташтырыңыз.",
            "4-этап (6+ ай): кардарларды кармап калуу программаларын киргизип, туруктуу өсүш үчүн жаңы рынок сегменттерине чыгыңыз.",
        ],
        summary: "Бизнесиңиздин профилине ({niche}) ылайык, киреше максатына жетүү үчүн айына болжол менен {leads} лид керек. Жарнамага салынган каражаттын болжолдуу кайтарымы: {roi}x.",
        thousands_separator: "\u{a0}",
    }
}
