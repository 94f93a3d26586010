//! Bundled ailment catalog for the student health domain.
//!
//! Pure data: every entry is a literal table row, built once behind
//! `KnowledgeBase::bundled()`. Symptom phrases are lowercase free text;
//! the matching engine relies on that. Record order is load-bearing: it is
//! the tie-breaking order for ranking and must not be rearranged.

use super::types::{AilmentId, AilmentRecord};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn ailment(
    id: &str,
    symptoms: &[&str],
    treatments: &[&str],
    medications: &[&str],
    duration: &str,
    prevention: &[&str],
) -> AilmentRecord {
    AilmentRecord {
        id: AilmentId::from(id),
        symptoms: strings(symptoms),
        treatments: strings(treatments),
        medications: strings(medications),
        duration: duration.to_string(),
        prevention: strings(prevention),
    }
}

/// Phrases that mark a complaint as an emergency regardless of any catalog
/// match. Checked by bidirectional substring containment.
pub(crate) fn emergency_symptoms() -> Vec<String> {
    strings(&[
        "chest pain",
        "difficulty breathing",
        "severe bleeding",
        "unconscious",
        "severe allergic reaction",
        "suicidal thoughts",
        "stroke symptoms",
        "severe head injury",
        "poisoning",
        "severe burns",
        "broken bones",
        "seizures",
        "severe abdominal pain",
        "high fever with rash",
        "anaphylaxis",
    ])
}

/// The full bundled catalog, in canonical order.
pub(crate) fn ailments() -> Vec<AilmentRecord> {
    vec![
        // ── Respiratory ─────────────────────────────────────────
        ailment(
            "common_cold",
            &["runny nose", "sneezing", "congestion", "mild cough", "mild fever", "sore throat"],
            &["Rest", "Increase fluid intake", "Paracetamol 500mg every 6 hours", "Saline nasal spray", "Throat lozenges"],
            &["Paracetamol", "Ibuprofen", "Decongestants", "Cough suppressants"],
            "5-7 days",
            &["Wash hands frequently", "Avoid close contact with sick people", "Don't touch face with unwashed hands"],
        ),
        ailment(
            "flu",
            &["high fever", "body aches", "fatigue", "headache", "cough", "chills"],
            &["Bed rest", "Fluids", "Paracetamol 1000mg every 6 hours", "Antiviral if within 48 hours"],
            &["Paracetamol", "Ibuprofen", "Oseltamivir (if prescribed)", "Cough medicine"],
            "7-10 days",
            &["Annual flu vaccination", "Good hygiene", "Avoid crowded places during flu season"],
        ),
        ailment(
            "bronchitis",
            &["persistent cough", "mucus production", "chest discomfort", "fatigue", "mild fever"],
            &["Rest", "Honey and warm water", "Steam inhalation", "Bronchodilators if prescribed"],
            &["Cough expectorants", "Bronchodilators", "Antibiotics if bacterial"],
            "2-3 weeks",
            &["Avoid smoking", "Good hygiene", "Stay hydrated"],
        ),
        ailment(
            "asthma_attack",
            &["wheezing", "shortness of breath", "chest tightness", "coughing"],
            &["Use rescue inhaler", "Sit upright", "Stay calm", "Seek medical help if severe"],
            &["Salbutamol inhaler", "Prednisolone if prescribed"],
            "Minutes to hours",
            &["Avoid triggers", "Use preventive inhalers", "Monitor peak flow"],
        ),
        // ── Gastrointestinal ────────────────────────────────────
        ailment(
            "gastroenteritis",
            &["nausea", "vomiting", "diarrhea", "stomach cramps", "fever", "dehydration"],
            &["Oral rehydration solution", "BRAT diet", "Rest", "Probiotics"],
            &["ORS packets", "Loperamide for diarrhea", "Probiotics"],
            "3-7 days",
            &["Good food hygiene", "Wash hands", "Avoid contaminated food/water"],
        ),
        ailment(
            "food_poisoning",
            &["sudden nausea", "vomiting", "diarrhea", "stomach pain", "fever"],
            &["Clear fluids", "Electrolyte replacement", "Rest", "Gradual food reintroduction"],
            &["ORS", "Anti-emetics if severe", "Probiotics"],
            "1-5 days",
            &["Proper food storage", "Cook food thoroughly", "Avoid expired food"],
        ),
        ailment(
            "acid_reflux",
            &["heartburn", "chest pain", "regurgitation", "difficulty swallowing"],
            &["Avoid trigger foods", "Eat smaller meals", "Elevate head while sleeping"],
            &["Antacids", "H2 blockers", "Proton pump inhibitors"],
            "Chronic condition",
            &["Avoid spicy foods", "Don't lie down after eating", "Maintain healthy weight"],
        ),
        ailment(
            "constipation",
            &["infrequent bowel movements", "hard stools", "straining", "abdominal pain"],
            &["Increase fiber intake", "More water", "Exercise", "Stool softeners"],
            &["Fiber supplements", "Stool softeners", "Laxatives if needed"],
            "Variable",
            &["High fiber diet", "Regular exercise", "Adequate water intake"],
        ),
        ailment(
            "diarrhea",
            &["frequent loose stools", "abdominal cramps", "dehydration", "urgency"],
            &["Fluid replacement", "BRAT diet", "Probiotics", "Rest"],
            &["ORS", "Loperamide", "Probiotics"],
            "2-5 days",
            &["Good hygiene", "Safe food practices", "Clean water"],
        ),
        // ── Mental health ───────────────────────────────────────
        ailment(
            "anxiety",
            &["excessive worry", "restlessness", "fatigue", "difficulty concentrating", "irritability"],
            &["Relaxation techniques", "Regular exercise", "Counseling", "Stress management"],
            &["SSRIs if prescribed", "Benzodiazepines for acute episodes"],
            "Variable",
            &["Regular exercise", "Adequate sleep", "Stress management", "Social support"],
        ),
        ailment(
            "depression",
            &["persistent sadness", "loss of interest", "fatigue", "sleep disturbances", "appetite changes"],
            &["Counseling", "Regular exercise", "Social support", "Routine maintenance"],
            &["Antidepressants if prescribed", "Mood stabilizers"],
            "Variable",
            &["Regular exercise", "Social connections", "Stress management", "Professional help"],
        ),
        ailment(
            "stress",
            &["tension", "irritability", "headaches", "sleep problems", "muscle tension"],
            &["Relaxation techniques", "Time management", "Exercise", "Adequate sleep"],
            &["Anxiolytics if severe", "Sleep aids if needed"],
            "Variable",
            &["Time management", "Regular breaks", "Exercise", "Healthy lifestyle"],
        ),
        ailment(
            "panic_attacks",
            &["rapid heartbeat", "sweating", "trembling", "shortness of breath", "chest pain"],
            &["Deep breathing", "Grounding techniques", "Stay in safe place", "Professional help"],
            &["Benzodiazepines for acute episodes", "Beta-blockers"],
            "Minutes",
            &["Stress management", "Avoid triggers", "Regular therapy", "Medication compliance"],
        ),
        // ── Musculoskeletal ─────────────────────────────────────
        ailment(
            "back_pain",
            &["lower back pain", "muscle stiffness", "limited mobility", "muscle spasms"],
            &["Rest", "Ice/heat therapy", "Gentle stretching", "Pain relievers"],
            &["Ibuprofen", "Paracetamol", "Muscle relaxants if needed"],
            "Few days to weeks",
            &["Good posture", "Regular exercise", "Proper lifting technique", "Ergonomic setup"],
        ),
        ailment(
            "neck_pain",
            &["neck stiffness", "pain", "headaches", "muscle spasms"],
            &["Gentle neck exercises", "Heat therapy", "Pain relievers", "Proper pillow"],
            &["NSAIDs", "Muscle relaxants"],
            "Few days to weeks",
            &["Good posture", "Ergonomic workstation", "Regular breaks", "Proper pillow"],
        ),
        ailment(
            "muscle_strain",
            &["muscle pain", "swelling", "limited range of motion", "muscle spasms"],
            &["RICE protocol", "Gentle stretching", "Gradual return to activity"],
            &["NSAIDs", "Topical analgesics"],
            "Few days to weeks",
            &["Proper warm-up", "Gradual exercise progression", "Good conditioning"],
        ),
        ailment(
            "shin_splints",
            &["pain along shin bone", "tenderness", "swelling", "pain during exercise"],
            &["Rest", "Ice therapy", "Proper footwear", "Gradual return to activity"],
            &["NSAIDs", "Topical pain relievers"],
            "2-6 weeks",
            &["Proper footwear", "Gradual training increase", "Cross-training"],
        ),
        // ── Headaches and neurological ──────────────────────────
        ailment(
            "tension_headache",
            &["band-like pressure", "mild to moderate pain", "neck tension", "fatigue"],
            &["Rest", "Stress management", "Regular sleep", "Pain relievers"],
            &["Paracetamol", "Ibuprofen", "Aspirin"],
            "30 minutes to 7 days",
            &["Stress management", "Regular sleep", "Stay hydrated", "Regular meals"],
        ),
        ailment(
            "migraine",
            &["severe headache", "nausea", "light sensitivity", "sound sensitivity", "visual disturbances"],
            &["Dark quiet room", "Cold compress", "Rest", "Prescribed medications"],
            &["Triptans", "NSAIDs", "Anti-emetics"],
            "4-72 hours",
            &["Identify triggers", "Regular sleep", "Stress management", "Preventive medications"],
        ),
        ailment(
            "cluster_headache",
            &["severe unilateral pain", "eye watering", "nasal congestion", "restlessness"],
            &["Oxygen therapy", "Triptans", "Avoid alcohol", "Regular sleep"],
            &["Sumatriptan", "Oxygen", "Verapamil for prevention"],
            "15 minutes to 3 hours",
            &["Avoid alcohol", "Regular sleep pattern", "Preventive medications"],
        ),
        // ── Skin ────────────────────────────────────────────────
        ailment(
            "acne",
            &["blackheads", "whiteheads", "pimples", "cysts", "scarring"],
            &["Gentle cleansing", "Topical treatments", "Avoid picking", "Oil-free products"],
            &["Benzoyl peroxide", "Salicylic acid", "Retinoids", "Antibiotics if severe"],
            "Chronic condition",
            &["Gentle skincare", "Avoid over-washing", "Oil-free products", "Don't pick"],
        ),
        ailment(
            "eczema",
            &["dry skin", "itching", "redness", "scaling", "cracking"],
            &["Moisturize regularly", "Avoid triggers", "Cool compresses", "Gentle skincare"],
            &["Topical corticosteroids", "Moisturizers", "Antihistamines"],
            "Chronic condition",
            &["Regular moisturizing", "Avoid harsh soaps", "Identify triggers", "Gentle fabrics"],
        ),
        ailment(
            "allergic_dermatitis",
            &["rash", "itching", "swelling", "blisters", "redness"],
            &["Avoid allergen", "Cool compresses", "Calamine lotion", "Antihistamines"],
            &["Topical corticosteroids", "Oral antihistamines", "Cool compresses"],
            "Few days to weeks",
            &["Identify and avoid allergens", "Protective clothing", "Gentle products"],
        ),
        ailment(
            "cold_sores",
            &["tingling", "small blisters", "pain", "crusting", "burning sensation"],
            &["Antiviral cream", "Pain relief", "Avoid triggers", "Keep area clean"],
            &["Acyclovir cream", "Oral antivirals if severe", "Pain relievers"],
            "7-10 days",
            &["Avoid triggers", "Sun protection", "Stress management", "Don't share items"],
        ),
        // ── Eye and ear ─────────────────────────────────────────
        ailment(
            "conjunctivitis",
            &["red eyes", "itching", "discharge", "tearing", "gritty feeling"],
            &["Warm compresses", "Eye hygiene", "Artificial tears", "Avoid touching eyes"],
            &["Antibiotic drops if bacterial", "Antihistamine drops if allergic"],
            "5-7 days",
            &["Good hygiene", "Don't share towels", "Avoid allergens", "Don't touch eyes"],
        ),
        ailment(
            "dry_eyes",
            &["burning", "stinging", "scratchy feeling", "sensitivity to light", "blurred vision"],
            &["Artificial tears", "Humidifier", "Screen breaks", "Blink exercises"],
            &["Lubricating eye drops", "Prescription drops if severe"],
            "Chronic condition",
            &["Regular screen breaks", "Proper lighting", "Stay hydrated", "Humidify air"],
        ),
        ailment(
            "ear_infection",
            &["ear pain", "hearing difficulty", "discharge", "fever", "pressure feeling"],
            &["Pain relief", "Warm compress", "Keep ear dry", "See doctor if severe"],
            &["Pain relievers", "Antibiotic drops if prescribed", "Oral antibiotics if needed"],
            "3-7 days",
            &["Keep ears dry", "Avoid cotton swabs", "Treat allergies", "Good hygiene"],
        ),
        // ── Sleep and fatigue ───────────────────────────────────
        ailment(
            "insomnia",
            &["difficulty falling asleep", "frequent waking", "early waking", "daytime fatigue"],
            &["Sleep hygiene", "Regular schedule", "Relaxation techniques", "Limit caffeine"],
            &["Melatonin", "Short-term sleep aids if prescribed"],
            "Variable",
            &["Regular sleep schedule", "Good sleep environment", "Limit screen time", "Exercise"],
        ),
        ailment(
            "chronic_fatigue",
            &["persistent tiredness", "weakness", "difficulty concentrating", "muscle pain"],
            &["Graded exercise", "Energy management", "Stress reduction", "Adequate sleep"],
            &["Supplements if deficient", "Pain relievers", "Sleep aids if needed"],
            "Chronic condition",
            &["Balanced lifestyle", "Regular exercise", "Stress management", "Good nutrition"],
        ),
        ailment(
            "sleep_apnea",
            &["loud snoring", "breathing interruptions", "daytime sleepiness", "morning headaches"],
            &["Weight management", "Sleep position changes", "CPAP if prescribed", "Avoid alcohol"],
            &["Nasal decongestants", "CPAP therapy"],
            "Chronic condition",
            &["Maintain healthy weight", "Sleep on side", "Avoid alcohol", "Regular exercise"],
        ),
        // ── Urological ──────────────────────────────────────────
        ailment(
            "urinary_tract_infection",
            &["burning urination", "frequent urination", "cloudy urine", "pelvic pain", "urgency"],
            &["Increase fluid intake", "Cranberry juice", "Urinate frequently", "Antibiotics if prescribed"],
            &["Antibiotics", "Pain relievers", "Urinary analgesics"],
            "3-7 days with treatment",
            &["Stay hydrated", "Urinate after intercourse", "Wipe front to back", "Avoid irritants"],
        ),
        ailment(
            "kidney_stones",
            &["severe flank pain", "blood in urine", "nausea", "vomiting", "frequent urination"],
            &["Increase water intake", "Pain management", "Strain urine", "Medical follow-up"],
            &["Strong pain relievers", "Alpha blockers", "Anti-nausea medication"],
            "Days to weeks",
            &["Stay well hydrated", "Limit sodium", "Moderate protein", "Avoid oxalate-rich foods"],
        ),
        // ── Nutritional and metabolic ───────────────────────────
        ailment(
            "iron_deficiency_anemia",
            &["fatigue", "weakness", "pale skin", "shortness of breath", "cold hands"],
            &["Iron-rich foods", "Iron supplements", "Vitamin C with iron", "Address underlying cause"],
            &["Iron supplements", "Vitamin C", "B12 if deficient"],
            "Weeks to months",
            &["Iron-rich diet", "Regular check-ups", "Address blood loss", "Balanced nutrition"],
        ),
        ailment(
            "vitamin_d_deficiency",
            &["bone pain", "muscle weakness", "fatigue", "depression", "frequent infections"],
            &["Sun exposure", "Vitamin D supplements", "Fortified foods", "Regular monitoring"],
            &["Vitamin D3 supplements", "High-dose vitamin D if severe"],
            "Months",
            &["Regular sun exposure", "Fortified foods", "Supplements if needed", "Regular testing"],
        ),
        ailment(
            "dehydration",
            &["thirst", "dry mouth", "fatigue", "dizziness", "dark urine"],
            &["Increase fluid intake", "Electrolyte replacement", "Rest in cool place", "Monitor urine color"],
            &["Oral rehydration solutions", "Electrolyte supplements"],
            "Hours to days",
            &["Regular water intake", "Monitor urine color", "Increase fluids in heat", "Limit alcohol"],
        ),
        // ── Women's health ──────────────────────────────────────
        ailment(
            "menstrual_cramps",
            &["lower abdominal pain", "back pain", "nausea", "headache", "mood changes"],
            &["Heat therapy", "Exercise", "Pain relievers", "Relaxation techniques"],
            &["NSAIDs", "Hormonal contraceptives", "Antispasmodics"],
            "2-3 days",
            &["Regular exercise", "Healthy diet", "Stress management", "Adequate sleep"],
        ),
        ailment(
            "yeast_infection",
            &["vaginal itching", "burning", "thick white discharge", "pain during urination"],
            &["Antifungal medications", "Probiotics", "Avoid irritants", "Cotton underwear"],
            &["Antifungal creams", "Oral antifungals", "Probiotics"],
            "3-7 days with treatment",
            &["Good hygiene", "Cotton underwear", "Avoid douching", "Limit antibiotics"],
        ),
        // ── Dental ──────────────────────────────────────────────
        ailment(
            "tooth_pain",
            &["throbbing pain", "sensitivity", "swelling", "bad taste", "fever"],
            &["Pain relievers", "Salt water rinse", "Cold compress", "See dentist urgently"],
            &["NSAIDs", "Antibiotics if infection", "Topical analgesics"],
            "Until treated",
            &["Regular brushing", "Flossing", "Regular dental check-ups", "Limit sugar"],
        ),
        ailment(
            "gum_disease",
            &["bleeding gums", "swelling", "bad breath", "receding gums", "loose teeth"],
            &["Improved oral hygiene", "Professional cleaning", "Antibacterial mouthwash", "Dental treatment"],
            &["Antibacterial mouthwash", "Antibiotics if severe"],
            "Chronic condition",
            &["Regular brushing", "Flossing", "Regular dental visits", "Quit smoking"],
        ),
        // ── Sports and exercise ─────────────────────────────────
        ailment(
            "heat_exhaustion",
            &["heavy sweating", "weakness", "nausea", "headache", "muscle cramps"],
            &["Move to cool place", "Remove excess clothing", "Cool water", "Electrolyte replacement"],
            &["Electrolyte solutions", "Pain relievers for headache"],
            "Hours",
            &["Stay hydrated", "Avoid peak heat", "Gradual acclimatization", "Light clothing"],
        ),
        ailment(
            "exercise_induced_asthma",
            &["coughing", "wheezing", "shortness of breath", "chest tightness", "fatigue"],
            &["Pre-exercise inhaler", "Proper warm-up", "Avoid cold air", "Gradual cool-down"],
            &["Bronchodilator inhaler", "Preventive inhalers"],
            "During and after exercise",
            &["Pre-exercise medication", "Proper warm-up", "Avoid triggers", "Good conditioning"],
        ),
    ]
}
