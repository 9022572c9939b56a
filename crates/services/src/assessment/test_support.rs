use assessment_core::model::{Catalog, CatalogDraft};

const SMALL_CATALOG: &str = r#"{
    "initial": { "name": "initial", "questions": [
        { "prompt": "Automation?", "options": [ { "label": "Manual", "score": 2 }, { "label": "Some", "score": 3 }, { "label": "High", "score": 4 } ] },
        { "prompt": "Data?", "options": [ { "label": "Paper", "score": 2 }, { "label": "Typed", "score": 3 }, { "label": "Sensors", "score": 4 } ] },
        { "prompt": "Decisions?", "options": [ { "label": "Gut", "score": 2 }, { "label": "Reports", "score": 3 }, { "label": "Live", "score": 4 } ] } ] },
    "detailed": {
        "industry2": { "name": "industry2", "questions": [
            { "prompt": "Scheduling?", "options": [ { "label": "Paper", "score": 0 }, { "label": "Sheets", "score": 1 }, { "label": "Software", "score": 2 } ] },
            { "prompt": "Inventory?", "options": [ { "label": "Counts", "score": 0 }, { "label": "Sheets", "score": 1 }, { "label": "RFID", "score": 2 } ] },
            { "prompt": "Maintenance?", "options": [ { "label": "Reactive", "score": 0 }, { "label": "Calendar", "score": 1 }, { "label": "Usage", "score": 2 } ] } ] },
        "industry3": { "name": "industry3", "questions": [
            { "prompt": "Supply chain?", "options": [ { "label": "Minimal", "score": 0 }, { "label": "Some", "score": 1 }, { "label": "Full", "score": 2 } ] },
            { "prompt": "IT/OT?", "options": [ { "label": "Separate", "score": 0 }, { "label": "Batch", "score": 1 }, { "label": "Live", "score": 2 } ] } ] },
        "industry4": { "name": "industry4", "questions": [
            { "prompt": "Digital twins?", "options": [ { "label": "None", "score": 0 }, { "label": "Some", "score": 1 }, { "label": "All", "score": 2 } ] },
            { "prompt": "ML?", "options": [ { "label": "None", "score": 0 }, { "label": "Pilots", "score": 1 }, { "label": "Production", "score": 2 } ] },
            { "prompt": "Autonomy?", "options": [ { "label": "None", "score": 0 }, { "label": "Lines", "score": 1 }, { "label": "Plant", "score": 2 } ] },
            { "prompt": "Edge?", "options": [ { "label": "None", "score": 0 }, { "label": "Some", "score": 1 }, { "label": "All", "score": 2 } ] } ] }
    },
    "recommendations": { "2": ["Automate"], "3": ["Integrate IT and OT", "Predictive maintenance"], "4": ["Scale AI"] }
}"#;

/// Three initial questions, detailed sets of 3 / 2 / 4 questions.
pub(crate) fn small_catalog() -> Catalog {
    serde_json::from_str::<CatalogDraft>(SMALL_CATALOG)
        .expect("small catalog parses")
        .validate()
        .expect("small catalog is valid")
}
