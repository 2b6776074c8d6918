/// Builds the marketing-audit prompt sent to the model for one website.
pub fn build_prompt(website_url: &str) -> String {
    format!(
        "Analyze the following website for a potential digital marketing audit: {website_url}\n\
         \n\
         Act as a senior growth strategist at \"Zamil.Marketing\".\n\
         Provide a concise, high-impact marketing proposal in 3 distinct parts:\n\
         1. CURRENT GAP: Identify a likely weakness (SEO, Speed, or PPC).\n\
         2. THE OPPORTUNITY: A high-impact \"low hanging fruit\" win.\n\
         3. THE 90-DAY GROWTH ROADMAP: A brief 3-step action plan.\n\
         \n\
         Tone: Professional, expert, slightly aggressive about results, and highly focused on ROI.\n\
         Avoid generic fluff. Mention that Zamil.Marketing uses proprietary search grounding techniques.\n\
         Format with clear headers."
    )
}
