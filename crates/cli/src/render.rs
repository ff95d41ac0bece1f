use dex_session::{CatalogPage, DisplayEntity, Locale};
use std::fmt::Write as _;

struct FieldLabels {
    color: &'static str,
    habitat: &'static str,
    capture_rate: &'static str,
    base_happiness: &'static str,
    growth_rate: &'static str,
    generation: &'static str,
    legendary: &'static str,
    mythical: &'static str,
    lineage: &'static str,
    no_description: &'static str,
    missing_id: &'static str,
    entries: &'static str,
    previous_page: &'static str,
    next_page: &'static str,
}

fn field_labels(locale: Locale) -> FieldLabels {
    match locale {
        Locale::Es => FieldLabels {
            color: "Color",
            habitat: "Hábitat",
            capture_rate: "Tasa de Captura",
            base_happiness: "Felicidad Base",
            growth_rate: "Tasa de Crecimiento",
            generation: "Generación",
            legendary: "Legendario",
            mythical: "Mítico",
            lineage: "Cadena de Evolución",
            no_description: "Sin descripción",
            missing_id: "N/A",
            entries: "especies",
            previous_page: "Anterior",
            next_page: "Siguiente",
        },
        Locale::En => FieldLabels {
            color: "Color",
            habitat: "Habitat",
            capture_rate: "Capture rate",
            base_happiness: "Base happiness",
            growth_rate: "Growth rate",
            generation: "Generation",
            legendary: "Legendary",
            mythical: "Mythical",
            lineage: "Evolution",
            no_description: "No description",
            missing_id: "N/A",
            entries: "species",
            previous_page: "Previous",
            next_page: "Next",
        },
    }
}

pub fn page_text(page: &CatalogPage, locale: Locale) -> String {
    let labels = field_labels(locale);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({} {})",
        locale.page_position(page.page_index, page.total_pages.max(1)),
        page.total_count,
        labels.entries
    );
    for item in &page.items {
        match item.reference_id {
            Some(id) => {
                let _ = writeln!(out, "{id:>5}  {}", item.title());
            }
            None => {
                let _ = writeln!(out, "{:>5}  {}", labels.missing_id, item.title());
            }
        }
    }
    let _ = writeln!(
        out,
        "{}: {}  {}: {}",
        labels.previous_page,
        locale.yes_no(page.can_go_previous()),
        labels.next_page,
        locale.yes_no(page.can_go_next())
    );
    out
}

pub fn detail_text(entity: &DisplayEntity, locale: Locale) -> String {
    let labels = field_labels(locale);
    let mut out = String::new();

    let _ = writeln!(out, "#{} {}", entity.id, entity.title);
    let _ = writeln!(out, "{}: {}", labels.color, entity.color_label);
    let _ = writeln!(out, "{}: {}", labels.habitat, entity.habitat);
    let _ = writeln!(out, "{}: {}", labels.capture_rate, entity.capture_rate_label);
    if let Some(happiness) = entity.base_happiness {
        let _ = writeln!(out, "{}: {happiness}", labels.base_happiness);
    }
    let _ = writeln!(out, "{}: {}", labels.growth_rate, entity.growth_rate);
    let _ = writeln!(out, "{}: {}", labels.generation, entity.generation);
    let _ = writeln!(
        out,
        "{}: {}",
        labels.legendary,
        locale.yes_no(entity.is_legendary)
    );
    let _ = writeln!(out, "{}: {}", labels.mythical, locale.yes_no(entity.is_mythical));

    out.push('\n');
    let _ = writeln!(
        out,
        "{}",
        entity.description.as_deref().unwrap_or(labels.no_description)
    );

    if !entity.stages.is_empty() {
        out.push('\n');
        match &entity.position {
            Some(position) => {
                let _ = writeln!(out, "{} ({position})", labels.lineage);
            }
            None => {
                let _ = writeln!(out, "{}", labels.lineage);
            }
        }
        for stage in &entity.stages {
            let marker = if stage.is_current { '>' } else { ' ' };
            match &stage.condition {
                Some(condition) => {
                    let _ = writeln!(out, "{marker} {}: {condition}", stage.title);
                }
                None => {
                    let _ = writeln!(out, "{marker} {}", stage.title);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dex_session::{CatalogSummary, StageView};
    use pretty_assertions::assert_eq;

    fn stage(id: u32, title: &str, condition: Option<&str>, is_current: bool) -> StageView {
        StageView {
            id,
            name: title.to_lowercase(),
            title: title.to_string(),
            sprite_url: format!("https://sprites.test/{id}.png"),
            condition: condition.map(str::to_string),
            is_current,
        }
    }

    fn wartortle() -> DisplayEntity {
        DisplayEntity {
            id: 8,
            name: "wartortle".into(),
            title: "Wartortle".into(),
            sprite_url: "https://sprites.test/8.png".into(),
            color_code: "blue".into(),
            color_label: "Azul".into(),
            habitat: "Waters Edge".into(),
            capture_rate: 45,
            capture_rate_label: "45/255".into(),
            base_happiness: Some(70),
            growth_rate: "Medium Slow".into(),
            is_legendary: false,
            is_mythical: false,
            description: Some("Se esconde en el agua.".into()),
            description_language: Some("es".into()),
            generation: "GENERATION I".into(),
            stages: vec![
                stage(7, "Squirtle", None, false),
                stage(8, "Wartortle", Some("Nivel 16"), true),
                stage(9, "Blastoise", Some("Nivel 36"), false),
            ],
            position: Some("2 de 3".into()),
            can_step_previous: true,
            can_step_next: true,
        }
    }

    #[test]
    fn page_lists_ids_and_titles() {
        let page = CatalogPage {
            items: vec![
                CatalogSummary {
                    name: "mr-mime".into(),
                    reference_id: Some(122),
                },
                CatalogSummary {
                    name: "missingno".into(),
                    reference_id: None,
                },
            ],
            total_count: 1025,
            page_index: 7,
            page_size: 20,
            total_pages: 52,
        };
        assert_eq!(
            page_text(&page, Locale::Es),
            concat!(
                "Página 7 de 52 (1025 especies)\n",
                "  122  Mr Mime\n",
                "  N/A  Missingno\n",
                "Anterior: Sí  Siguiente: Sí\n",
            )
        );
    }

    #[test]
    fn detail_marks_current_stage() {
        let text = detail_text(&wartortle(), Locale::Es);
        assert!(text.starts_with("#8 Wartortle\nColor: Azul\n"));
        assert!(text.contains("Tasa de Captura: 45/255\n"));
        assert!(text.contains("Felicidad Base: 70\n"));
        assert!(text.contains("Tasa de Crecimiento: Medium Slow\n"));
        assert!(text.contains("Legendario: No\nMítico: No\n"));
        assert!(text.contains(concat!(
            "Cadena de Evolución (2 de 3)\n",
            "  Squirtle\n",
            "> Wartortle: Nivel 16\n",
            "  Blastoise: Nivel 36\n",
        )));
    }

    #[test]
    fn standalone_detail_has_no_lineage_block() {
        let mut entity = wartortle();
        entity.stages.clear();
        entity.position = None;
        entity.description = None;
        entity.base_happiness = None;
        let text = detail_text(&entity, Locale::En);
        assert!(text.ends_with("No description\n"));
        assert!(!text.contains("Base happiness"));
        assert!(!text.contains("Evolution"));
    }
}
