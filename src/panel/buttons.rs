use serde::Serialize;

use crate::input::Snapshot;
use crate::model::sample::TrackType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonDef {
    pub track_type: TrackType,
    pub label: &'static str,
    pub icon: &'static str,
}

const READ_BUTTONS: &[ButtonDef] = &[
    ButtonDef {
        track_type: TrackType::Alignment,
        label: "SHOW READS",
        icon: "options",
    },
    ButtonDef {
        track_type: TrackType::Junction,
        label: "SHOW RNASeq",
        icon: "dna",
    },
    ButtonDef {
        track_type: TrackType::Gcnv,
        label: "SHOW gCNV",
        icon: "industry",
    },
];

pub fn button_def(track_type: TrackType) -> Option<&'static ButtonDef> {
    READ_BUTTONS.iter().find(|b| b.track_type == track_type)
}

/// Track types a button of `track_type` asks the panel to open with.
pub fn requested_types(track_type: TrackType) -> Vec<TrackType> {
    match track_type {
        TrackType::Junction => vec![TrackType::Junction, TrackType::Coverage],
        other => vec![other],
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadButton {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// `None` for the per-type header shown above several families.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_guid: Option<String>,
    #[serde(serialize_with = "serialize_types")]
    pub types: Vec<TrackType>,
}

fn serialize_types<S: serde::Serializer>(types: &[TrackType], s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(types.iter().map(|t| t.key()))
}

/// "Show reads" buttons for the given families. A single family gets one
/// button per available type; several families get a header per type
/// followed by one `| <familyId>` button per family having that type.
pub fn read_buttons(snapshot: &Snapshot, family_guids: &[String]) -> Vec<ReadButton> {
    let mut type_families: Vec<(TrackType, Vec<&str>)> = Vec::new();
    for family_guid in family_guids {
        for track_type in snapshot.family_samples(family_guid).track_types() {
            match type_families.iter_mut().find(|(t, _)| *t == track_type) {
                Some((_, families)) => families.push(family_guid.as_str()),
                None => type_families.push((track_type, vec![family_guid.as_str()])),
            }
        }
    }

    let mut out = Vec::new();
    if let [family_guid] = family_guids {
        for (track_type, _) in &type_families {
            let Some(def) = button_def(*track_type) else {
                continue;
            };
            out.push(ReadButton {
                label: def.label.to_string(),
                icon: Some(def.icon),
                family_guid: Some(family_guid.clone()),
                types: requested_types(*track_type),
            });
        }
        return out;
    }

    for (track_type, families) in &type_families {
        let Some(def) = button_def(*track_type) else {
            continue;
        };
        out.push(ReadButton {
            label: def.label.to_string(),
            icon: Some(def.icon),
            family_guid: None,
            types: requested_types(*track_type),
        });
        for family_guid in families {
            let family_id = snapshot
                .families_by_guid
                .get(*family_guid)
                .map(|f| f.family_id.as_str())
                .unwrap_or(*family_guid);
            out.push(ReadButton {
                label: format!("| {family_id}"),
                icon: None,
                family_guid: Some(family_guid.to_string()),
                types: requested_types(*track_type),
            });
        }
    }
    out
}
