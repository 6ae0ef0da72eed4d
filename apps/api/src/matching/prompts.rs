// Prompt constants for AI-assisted match scoring. The reply is parsed for its first number.

pub const MATCH_SCORE_SYSTEM: &str = "You are an expert recruitment AI that calculates \
    job-candidate match percentages. Return only a number between 0-100 representing the \
    match percentage, followed by a brief explanation.";

/// Match prompt template. Every `{placeholder}` is substituted by `build_match_prompt`.
pub const MATCH_SCORE_PROMPT_TEMPLATE: &str = "Analyze the match between this candidate and job posting:

CANDIDATE PROFILE:
- Experience: {candidate_years} years ({candidate_level} level)
- Skills: {candidate_skills}
- Location: {candidate_location}
- Job Type Preferences: {candidate_job_types}
- Summary: {candidate_summary}

JOB POSTING:
- Title: {job_title}
- Company: {company}
- Required Experience: {job_experience_min}+ years ({job_level} level)
- Required Skills: {job_skills}
- Location: {job_location}
- Job Type: {job_type}
- Description: {job_description}
- Requirements: {job_requirements}

Calculate a match percentage (0-100) based on:
1. Skills alignment and transferability
2. Experience level appropriateness
3. Career progression fit
4. Location and work arrangement compatibility
5. Overall role suitability

Provide the percentage and brief explanation.";
