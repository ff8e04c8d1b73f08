//! Built-in survey variants.

use crate::survey::prompts::{GENERAL_PROMPT_TEMPLATE, GENERAL_SYSTEM, INDORO_PROMPT_TEMPLATE};
use crate::survey::schema::{Question, SurveyConfig, SurveyVariant};

pub fn survey_config(variant: SurveyVariant) -> SurveyConfig {
    match variant {
        SurveyVariant::General => general(),
        SurveyVariant::Indoro => indoro(),
    }
}

fn general() -> SurveyConfig {
    const POLITICAL: &str = "Political & Legal";
    const ECONOMIC: &str = "Economic Priorities";
    const SOCIAL: &str = "Social & Cultural";
    const TECH: &str = "Technology Skills";
    const ENVIRONMENT: &str = "Environmental & Lifestyle";

    let questions = vec![
        Question::choice(
            "visa_status",
            POLITICAL,
            "What is your work authorization status in South Korea?",
            &["Korean citizen", "Have work visa", "Need work visa", "Student visa"],
        ),
        Question::choice(
            "sector_preference",
            POLITICAL,
            "Which sector do you prefer?",
            &["Government/Public", "Private companies", "Startups", "No preference"],
        ),
        Question::choice(
            "work_regulations",
            POLITICAL,
            "How do you feel about following strict workplace rules?",
            &[
                "I like clear rules",
                "It's okay",
                "I prefer flexibility",
                "I don't like many rules",
            ],
        ),
        Question::choice(
            "salary_priority",
            ECONOMIC,
            "What matters most to you about salary?",
            &[
                "High starting salary",
                "Steady growth over time",
                "Just enough to live well",
                "Money isn't my priority",
            ],
        ),
        Question::choice(
            "work_hours",
            ECONOMIC,
            "What work schedule do you prefer?",
            &["Standard 9-6", "Flexible hours", "Long hours, high pay", "Part-time work"],
        ),
        Question::choice(
            "job_security",
            ECONOMIC,
            "What's more important to you?",
            &["Job security", "Career growth", "Both equally", "Work-life balance"],
        ),
        Question::choice(
            "korean_language",
            SOCIAL,
            "How well do you speak Korean?",
            &[
                "Native/Fluent",
                "Good (can work in Korean)",
                "Basic (need help)",
                "Beginner/None",
            ],
        ),
        Question::choice(
            "work_style",
            SOCIAL,
            "What work environment do you prefer?",
            &[
                "Traditional Korean office",
                "International company",
                "Modern startup",
                "Remote work",
            ],
        ),
        Question::choice(
            "team_work",
            SOCIAL,
            "How do you like to work?",
            &["In a team", "Independently", "Mix of both", "Leading others"],
        ),
        Question::choice(
            "tech_skills",
            TECH,
            "How would you describe your tech skills?",
            &[
                "Expert (programming, etc.)",
                "Good (comfortable with software)",
                "Basic (email, office)",
                "Need help with technology",
            ],
        ),
        Question::choice(
            "ai_interest",
            TECH,
            "How do you feel about AI and automation?",
            &[
                "Very interested",
                "Somewhat interested",
                "Neutral",
                "Prefer traditional work",
            ],
        ),
        Question::choice(
            "digital_comfort",
            TECH,
            "How comfortable are you learning new software?",
            &[
                "Love learning new tools",
                "Comfortable if needed",
                "Prefer familiar tools",
                "Avoid new technology",
            ],
        ),
        Question::choice(
            "sustainability",
            ENVIRONMENT,
            "How important is environmental work to you?",
            &["Very important", "Somewhat important", "Not important", "I don't care"],
        ),
        Question::choice(
            "work_location",
            ENVIRONMENT,
            "Where would you prefer to work in Korea?",
            &["Seoul", "Busan", "Other major city", "Smaller city/rural"],
        ),
        Question::choice(
            "industry_interest",
            ENVIRONMENT,
            "Which industry interests you most?",
            &[
                "Technology/IT",
                "Manufacturing",
                "Healthcare",
                "Education",
                "Entertainment/Media",
                "Finance",
                "Other",
            ],
        ),
    ];

    SurveyConfig {
        variant: SurveyVariant::General,
        title: "South Korea Job Matcher".to_string(),
        questions,
        prompt_template: GENERAL_PROMPT_TEMPLATE.to_string(),
        system_prompt: Some(GENERAL_SYSTEM.to_string()),
        model: "gpt-4".to_string(),
        max_tokens: 1500,
        temperature: 0.7,
    }
}

fn indoro() -> SurveyConfig {
    const PERSONAL: &str = "Personal Information";
    const INTERESTS: &str = "Academic & Career Interests";
    const SKILLS: &str = "Skills & Technology";
    const LANGUAGE: &str = "Language & Adaptability";
    const EXPLORATION: &str = "Career Exploration";

    let questions = vec![
        Question::free_text("name", PERSONAL, "Full Name"),
        Question::free_text("college", PERSONAL, "College/University"),
        Question::free_text("email", PERSONAL, "Email Address"),
        Question::choice(
            "sector_preference",
            INTERESTS,
            "Which sector are you most interested in exploring in Korea?",
            &[
                "Technology/IT",
                "Finance/Consulting",
                "Education",
                "Healthcare",
                "Startups/Entrepreneurship",
                "Green/Energy",
                "Entertainment/Media",
                "Other",
            ],
        ),
        Question::choice(
            "job_stability",
            INTERESTS,
            "Which type of career path appeals to you most?",
            &[
                "Stable and structured",
                "Dynamic and high-growth",
                "A balance of both",
                "Flexible/freelance options",
            ],
        ),
        Question::choice(
            "work_hours",
            INTERESTS,
            "Preferred work-life balance?",
            &[
                "Regular 9-6 schedule",
                "Flexible hours",
                "Project-based/workload varies",
                "Part-time/freelance",
            ],
        ),
        Question::choice(
            "tech_comfort",
            SKILLS,
            "Comfort with technology in academics or projects?",
            &[
                "Expert (coding, data, design tools)",
                "Comfortable with software tools",
                "Basic (Word, Excel, presentations)",
                "Need more practice with tech",
            ],
        ),
        Question::choice(
            "digital_skills",
            SKILLS,
            "What best describes your technical skills?",
            &[
                "Programming/Data Analysis",
                "Software/Office tools",
                "Basic computer skills",
                "No particular skills",
            ],
        ),
        Question::choice(
            "ai_interest",
            SKILLS,
            "Interest in AI or automation in your career?",
            &["Very interested", "Somewhat interested", "Neutral", "Not interested"],
        ),
        Question::choice(
            "korean_language",
            LANGUAGE,
            "Korean language proficiency?",
            &["Fluent", "Conversational", "Beginner/Just started", "No experience"],
        ),
        Question::choice(
            "cultural_adaptability",
            LANGUAGE,
            "Confidence in adapting to Korean work culture?",
            &["Very confident", "Somewhat confident", "Neutral", "Not confident"],
        ),
        Question::choice(
            "work_environment",
            LANGUAGE,
            "Preferred work environment?",
            &[
                "Structured corporate",
                "Startup/innovative",
                "Research/academic",
                "Flexible/remote",
            ],
        ),
        Question::choice(
            "team_work",
            LANGUAGE,
            "How do you prefer to work on projects?",
            &["In a team", "Independently", "Combination of both", "Leading others"],
        ),
        Question::choice(
            "industry_interest",
            EXPLORATION,
            "Which industries would you like to explore first in Korea?",
            &[
                "Technology/IT",
                "Finance/Consulting",
                "Healthcare",
                "Education",
                "Startups",
                "Entertainment/Media",
                "Green/Energy",
                "Other",
            ],
        ),
        Question::choice(
            "location_preference",
            EXPLORATION,
            "Preferred city or region for work in Korea?",
            &["Seoul", "Busan", "Other major city", "Smaller city/rural area"],
        ),
        Question::choice(
            "career_orientation",
            EXPLORATION,
            "Which best describes your career orientation?",
            &[
                "Innovation-focused",
                "Stability-focused",
                "Balanced",
                "Exploration/Flexible",
            ],
        ),
    ];

    SurveyConfig {
        variant: SurveyVariant::Indoro,
        title: "Indoro - Labour Market Survey".to_string(),
        questions,
        prompt_template: INDORO_PROMPT_TEMPLATE.to_string(),
        system_prompt: None,
        model: "gpt-4o-mini".to_string(),
        max_tokens: 800,
        temperature: 0.6,
    }
}
