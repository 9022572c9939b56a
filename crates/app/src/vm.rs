use assessment_core::model::{Answers, IndustryLevel, QuestionSet, Stage};
use services::{ResultItem, ResultView};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageCopyVm {
    pub heading: String,
    pub intro: String,
    pub submit_label: &'static str,
}

/// Heading, intro and submit label for a question stage.
#[must_use]
pub fn map_stage_copy(stage: Stage) -> Option<StageCopyVm> {
    match stage {
        Stage::Initial => Some(StageCopyVm {
            heading: "Initial Assessment".to_string(),
            intro: "Answer the following questions to determine your current industry level."
                .to_string(),
            submit_label: "Determine Industry Level",
        }),
        Stage::Detailed(level) => Some(StageCopyVm {
            heading: format!("Detailed {} Assessment", level.display_name()),
            intro: format!("Let's dive deeper into your {} practices.", level.display_name()),
            submit_label: "Submit Detailed Assessment",
        }),
        Stage::Result => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    /// 1-based key the respondent types.
    pub key: usize,
    pub label: String,
    pub score: u32,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub index: usize,
    pub prompt: String,
    pub options: Vec<OptionVm>,
}

#[must_use]
pub fn map_questions(set: &QuestionSet, answers: &Answers) -> Vec<QuestionVm> {
    set.questions()
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let chosen = answers.get(index);
            let options = question
                .options()
                .iter()
                .enumerate()
                .map(|(position, option)| OptionVm {
                    key: position + 1,
                    label: option.label.clone(),
                    score: option.score,
                    selected: chosen == Some(option.score),
                })
                .collect();
            QuestionVm {
                index,
                prompt: question.prompt().to_string(),
                options,
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultItemVm {
    pub prompt: String,
    pub score_label: String,
    pub percent_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub level_title: String,
    pub level_caption: &'static str,
    pub progress_title: String,
    pub journey_label: String,
    pub details_title: &'static str,
    pub items: Vec<ResultItemVm>,
    pub recommendations_title: String,
    pub recommendations: Vec<String>,
    pub reset_label: &'static str,
}

/// Rounds half away from zero, so 12.5 shows as 13%.
#[must_use]
pub fn format_percent(value: f64) -> String {
    format!("{:.0}%", value.round())
}

fn map_result_item(item: &ResultItem) -> ResultItemVm {
    let score_label = match item.score {
        Some(score) => format!("{score}/{}", item.max_score),
        None => format!("-/{}", item.max_score),
    };
    ResultItemVm {
        prompt: item.prompt.clone(),
        score_label,
        percent_label: format_percent(item.percent()),
    }
}

fn target_phrase(level: IndustryLevel, next: Option<IndustryLevel>) -> (String, String) {
    let progress = format!("Your {} Progress", level.display_name());
    match next {
        Some(next) => (progress, format!("Recommendations to reach {}", next.display_name())),
        None => (progress, format!("Recommendations to sustain {}", level.display_name())),
    }
}

#[must_use]
pub fn map_result(view: &ResultView) -> ResultVm {
    let percent = format_percent(view.progress);
    let journey_label = match view.next_level {
        Some(next) => format!(
            "You've completed {percent} of the journey to {}",
            next.display_name()
        ),
        None => format!(
            "You've completed {percent} of the {} practices",
            view.level.display_name()
        ),
    };
    let (progress_title, recommendations_title) = target_phrase(view.level, view.next_level);

    ResultVm {
        level_title: view.level.display_name(),
        level_caption: "Your Current Level",
        progress_title,
        journey_label,
        details_title: "Detailed Assessment Results",
        items: view.items.iter().map(map_result_item).collect(),
        recommendations_title,
        recommendations: view.recommendations.clone(),
        reset_label: "Start New Assessment",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assessment_core::time::fixed_now;

    fn view(level: IndustryLevel, progress: f64) -> ResultView {
        ResultView {
            level,
            next_level: level.next(),
            progress,
            total_score: 3,
            max_score: 6,
            items: vec![
                ResultItem {
                    prompt: "Scheduling?".to_string(),
                    score: Some(1),
                    max_score: 2,
                },
                ResultItem {
                    prompt: "Inventory?".to_string(),
                    score: None,
                    max_score: 2,
                },
            ],
            recommendations: vec!["Automate".to_string()],
            completed_at: fixed_now(),
        }
    }

    #[test]
    fn stage_copy_matches_stage() {
        let initial = map_stage_copy(Stage::Initial).unwrap();
        assert_eq!(initial.heading, "Initial Assessment");
        assert_eq!(initial.submit_label, "Determine Industry Level");

        let detailed = map_stage_copy(Stage::Detailed(IndustryLevel::Three)).unwrap();
        assert_eq!(detailed.heading, "Detailed Industry 3.0 Assessment");
        assert_eq!(detailed.intro, "Let's dive deeper into your Industry 3.0 practices.");
        assert_eq!(detailed.submit_label, "Submit Detailed Assessment");

        assert_eq!(map_stage_copy(Stage::Result), None);
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        assert_eq!(format_percent(12.5), "13%");
        assert_eq!(format_percent(2.5), "3%");
        assert_eq!(format_percent(33.333), "33%");
        assert_eq!(format_percent(100.0), "100%");
    }

    #[test]
    fn result_targets_next_level() {
        let vm = map_result(&view(IndustryLevel::Two, 50.0));
        assert_eq!(vm.level_title, "Industry 2.0");
        assert_eq!(vm.progress_title, "Your Industry 2.0 Progress");
        assert_eq!(
            vm.journey_label,
            "You've completed 50% of the journey to Industry 3.0"
        );
        assert_eq!(vm.recommendations_title, "Recommendations to reach Industry 3.0");
        assert_eq!(vm.items[0].score_label, "1/2");
        assert_eq!(vm.items[0].percent_label, "50%");
        assert_eq!(vm.items[1].score_label, "-/2");
    }

    #[test]
    fn top_level_never_mentions_industry_five() {
        let vm = map_result(&view(IndustryLevel::Four, 83.3));
        assert_eq!(
            vm.journey_label,
            "You've completed 83% of the Industry 4.0 practices"
        );
        assert_eq!(vm.recommendations_title, "Recommendations to sustain Industry 4.0");
        assert!(!vm.journey_label.contains("5.0"));
    }

    #[test]
    fn questions_mark_selected_option() {
        let catalog = services::builtin_catalog().unwrap();
        let answers: Answers = [(0, 3)].into_iter().collect();

        let questions = map_questions(catalog.initial(), &answers);

        assert_eq!(questions.len(), catalog.initial().len());
        assert_eq!(questions[0].options[1].key, 2);
        assert!(questions[0].options[1].selected);
        assert!(!questions[0].options[0].selected);
        assert!(questions[1].options.iter().all(|option| !option.selected));
    }
}
