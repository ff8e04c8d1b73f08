// Recommendation prompt templates, one per survey variant.
// Placeholders are question ids; `SurveyConfig::validate` rejects any other key.

/// System message for the general (PESTLE) survey.
pub const GENERAL_SYSTEM: &str = "You are an expert career counselor specializing in the \
    South Korean job market. Provide detailed, practical, and culturally-aware job \
    recommendations.";

pub const GENERAL_PROMPT_TEMPLATE: &str = r#"Based on the following PESTLE survey responses from a job seeker interested in working in South Korea,
provide a personalized job recommendation. Consider the current South Korean job market trends,
major industries, and realistic opportunities.

Survey Responses:
- Work Authorization: {visa_status}
- Sector Preference: {sector_preference}
- Attitude to Workplace Rules: {work_regulations}
- Salary Priority: {salary_priority}
- Work Schedule Preference: {work_hours}
- Security vs Growth: {job_security}
- Korean Language Level: {korean_language}
- Work Environment Preference: {work_style}
- Team Work Preference: {team_work}
- Technology Skills: {tech_skills}
- AI Interest Level: {ai_interest}
- Comfort Learning New Software: {digital_comfort}
- Importance of Environmental Work: {sustainability}
- Preferred Location: {work_location}
- Industry Interest: {industry_interest}

Please provide:
1. **Primary Job Recommendation**: Specific job title and industry
2. **Why This Fits**: Explanation based on their responses
3. **Alternative Options**: 2-3 other suitable job roles
4. **Industry Insights**: Brief overview of the recommended sector in South Korea
5. **Next Steps**: Practical advice for pursuing this career path in South Korea
6. **Salary Expectations**: Realistic salary ranges in KRW
7. **Required Skills**: Key skills they should develop

Focus on realistic opportunities in South Korea's major industries like:
- Technology (Samsung, LG, Naver, Kakao)
- Manufacturing (automotive, shipbuilding, steel)
- Healthcare and eldercare
- Education (English teaching, international schools)
- Finance and consulting
- Entertainment and media (K-pop, gaming)
- Green energy and sustainability
- E-commerce and logistics

Keep the response practical, encouraging, and specific to the South Korean market."#;

pub const INDORO_PROMPT_TEMPLATE: &str = r#"You are a career counselor specializing in the South Korean job market for Indian Students.
Based on the following survey responses, provide a concise but tailored job recommendation for an Indian Student.
Keep it practical, realistic, and specific to South Korea.

Survey Responses:
Sector Preference: {sector_preference}
Job Stability vs Growth: {job_stability}
Work Hours Preference: {work_hours}
Korean Language Level: {korean_language}
Cultural Adaptability: {cultural_adaptability}
Tech Comfort: {tech_comfort}
Digital Skills: {digital_skills}
AI Interest: {ai_interest}
Work Environment Preference: {work_environment}
Team Work Preference: {team_work}
Industry Interest: {industry_interest}
Location Preference: {location_preference}
Career Orientation: {career_orientation}

Please provide:
1. Primary Job Recommendation (specific role + Potential Companies + industry)
2. Why This Fits (link to responses)
3. 2–3 Alternative Options
4. Industry Outlook (brief, 2 sentences max)
5. Next Steps (practical advice for pursuing this career in Korea)
6. Required Skills (short bullet list)
7. Salary Range (INR, realistic and at least 30 lakh per year)
8. Mention how Indians In Korea (IIK), ISRK (Indian Student Researchers In Korea) and SkalePlus help with several processes, as well as the Indian Embassy in Seoul

Focus on sectors like technology, manufacturing, healthcare, education, finance, entertainment, green energy, e-commerce, and logistics."#;
