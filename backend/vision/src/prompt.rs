//! The fixed extraction instruction sent with every image.

/// Instruction describing the required JSON output schema, with the
/// date-normalization and defaulting rules the parser relies on.
pub const EXTRACTION_PROMPT: &str = r#"You are an AI assistant given a single image containing one or more FMCG (Fast Moving Consumer Goods) products. Analyze the image and produce a structured JSON output describing each distinct product.

For each distinct product identify:

1. Brand: the brand name visible on the packaging. If no brand is recognizable, output a best guess or "Unknown".

2. Expiry date: extract any expiry information (labels like "Expiry Date", "Best Before", "Use By", "BB"). The date may appear in various formats (DD/MM/YYYY, MM/YY, DD-MM-YYYY, month and year only, year only, or a "best before N months" period relative to a manufacture date). Convert the identified expiry date into DD/MM/YYYY format only:
   - If the day is missing, use 01.
   - If the month is missing, use 01 (January).
   - If only a year is given, assume 01/01/YYYY.
   - If the expiry must be computed from a "best before" period, add the period to the manufacture date and use the first day of the resulting month when the day is unclear.
   - If no expiry date is found at all, return "NA".

3. Count: the number of identical units of that product visible in the image, accounting for overlapping or partially occluded items.

Output format: your entire answer must be a single JSON array with one object per distinct product, each object having exactly the keys "brand" (string), "expiry_date" (string, DD/MM/YYYY or "NA"), and "count" (integer). Example:

[
  {"brand": "Nestle", "expiry_date": "01/12/2024", "count": 2},
  {"brand": "Cadbury", "expiry_date": "01/06/2025", "count": 1}
]

Return only the JSON array of product objects without any additional text or formatting."#;
