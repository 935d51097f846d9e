use crate::genotype::{CalledGenotype, GenotypeCall, IndividualRow};
use crate::genotype::details::DetailField;
use crate::model::variant::Variant;

pub const NO_CALL: &str = "NO CALL";

pub fn render_genotype_report(variant: &Variant, rows: &[IndividualRow]) -> String {
    let mut out = String::new();

    let header = format!(
        "Variant {} (chr{}:{} {}>{})",
        variant.variant_id,
        variant.bare_chrom(),
        variant.pos,
        variant.ref_allele,
        variant.alt_allele
    );
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"=".repeat(header.chars().count()));
    out.push_str("\n\n");

    for row in rows {
        out.push_str(&format!("{} {}\n", row.glyph, row.name));
        if !row.features.is_empty() {
            out.push_str(&format!("  Phenotypes: {}\n", row.features.join(", ")));
        }
        match &row.call {
            None => {}
            Some(GenotypeCall::NoCall) => out.push_str(&format!("  {}\n", NO_CALL)),
            Some(GenotypeCall::Called(call)) => push_call(&mut out, call),
        }
        out.push('\n');
    }

    out
}

fn push_call(out: &mut String, call: &CalledGenotype) {
    out.push_str(&format!("  Genotype: {}", call.alleles));
    if let Some(warning) = call.warning {
        out.push_str(&format!(" [{}]", warning.label()));
    }
    out.push('\n');
    out.push_str(&format!("  Quality: {}", call.quality));
    if let Some(ab) = &call.allelic_balance {
        out.push_str(&format!("  AB: {}", ab));
    }
    out.push('\n');
    if let Some(filters) = &call.filters {
        out.push_str(&format!("  Filters: {}\n", filters));
    }
    push_details(out, &call.details, "    ");
    if let Some(other) = &call.other_sample {
        if other.conflicting {
            out.push_str("  Other sample (conflicting call):\n");
        } else {
            out.push_str("  Other sample:\n");
        }
        push_details(out, &other.details, "    ");
    }
}

fn push_details(out: &mut String, details: &[DetailField], indent: &str) {
    for field in details {
        out.push_str(&format!("{}{}: {}\n", indent, field.title, field.value));
    }
}
