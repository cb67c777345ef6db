//! Prompt templates for the research, refine, and evaluation calls.

/// Macro-first research prompt: industry and category before SKUs,
/// sub-brand mentions confined to a single field, JSON-only output.
pub(crate) const BRAND_RESEARCH_PROMPT: &str = r#"You are a senior brand strategist.

Goal: using the supplied sources (official site, company pages, press,
encyclopedia, official social) as evidence, summarize the brand at the
corporate/masterbrand level. Do not define the brand in overly micro terms
(a single menu item, promotion, or campaign).

Macro-first rules (mandatory):
- Priority order: industry -> category/core value -> positioning and
  differentiators -> main audiences/regions -> visual and tonal traits.
- Individual SKUs, menu items, and time-limited campaigns may be mentioned
  only as examples, and only inside notable_programs_or_subbrands.
- The one-line definition of the brand must never have a specific product
  name as its subject.
- Do not overfit to a single source; prefer what multiple sources agree on.

Return ONLY the following JSON (keep every field; empty strings/arrays are
allowed where needed):

{
  "brand": "<brand name>",
  "category": "<top-level industry/category, e.g. global fast-food franchise, sportswear, consumer electronics>",
  "brand_scope": "corporate|masterbrand|product_line",
  "granularity": "macro|meso|micro",
  "executive_summary": "3-5 sentences at the corporate level: industry, scale, core value, differentiators, flagship offerings",
  "primary_offerings": ["broad product/service families, never SKUs", ""],
  "brand_identity": {
    "positioning": "",
    "values": ["", ""],
    "tone_voice": ["", ""],
    "visual_cues": ["colors / imagery style / logo rules, top-level only"]
  },
  "target_audience": ["", ""],
  "market_perception": {
    "top_keywords": ["", ""],
    "explanation": "how consumers/media perceive the brand at the top level (no niche product names)",
    "notes": ""
  },
  "notable_programs_or_subbrands": ["up to 3 sub-programs/sub-brands, if any"],
  "evidence_notes": "2-4 sentences grounding the summary in the most reliable sources",
  "confidence": 0.0
}

Output rules:
- granularity must in principle be "macro" (corporate/masterbrand view).
- primary_offerings and keywords use categories, never SKU/menu names.
- Only notable_programs_or_subbrands may list individual programs/campaigns."#;

/// Refine prompt: same schema, same evidence, strictly macro this time.
pub(crate) const REFINE_BRAND_RESEARCH_PROMPT: &str = r#"The initial result below is too micro-level. Using the same evidence,
re-derive the summary strictly at the corporate/masterbrand "macro" level.
The JSON schema and rules are identical to the original research prompt,
and granularity must be set to "macro". No SKU- or single-menu-centric
descriptions.

Consult the [INITIAL RESPONSE JSON], but move any individual programs or
menu items into notable_programs_or_subbrands only; the summary, category,
and primary_offerings must use top-level categories.

Return JSON only."#;

/// Fit evaluation rubric: three fixed dimensions, deterministic
/// aggregate, normalized hotspot coordinates, no self-numbering.
pub(crate) const FIT_EVAL_PROMPT: &str = r#"You are a Brand Guardianship judge.
Key rules:
- Each dimension score is an integer 0-100.
- overall_score = round(mean of the three dimension scores)
- verdict:
  80-100: "Strong fit"
  60-79 : "Good fit"
  40-59 : "Borderline"
  0-39  : "Misaligned"
JSON ONLY:
{
  "overall_score": 0, "verdict": "",
  "dimensions": [
    {"name":"Tone & Voice","score":0,"rationale":""},
    {"name":"Visual Identity","score":0,"rationale":""},
    {"name":"Brand-Product Relevance","score":0,"rationale":""}
  ],
  "copy_suggestions":[{"before":"","after":"","reason":""}],
  "cta_proposals":[{"cta":"","expected_effect":""}],
  "image_feedback":[
    {"index":1,"notes":"","risks":[""],"suggested_edits":[""],
     "hotspots":[
       {"shape":"circle","cx":0.72,"cy":0.40,"r":0.08,"label":"","risks":[""],"suggested_edits":[""]},
       {"shape":"rect","x":0.10,"y":0.25,"w":0.18,"h":0.10,"label":"","risks":[""],"suggested_edits":[""]}
     ]}
  ],
  "reasoning_notes":""
}
Coordinates are normalized to 0-1. Do not put numbering characters in
label/risks/edits; the UI handles numbering."#;
