//! The built-in comparison tables: a fixed feature schema and a benchmark
//! schema generated from whatever models the fixture carries.

use super::{FormatterKind, PropertyDescriptor};
use crate::fixtures::{BenchmarkData, DOT_PRODUCT_BRANCH};

const ZKML_CLI_ONLY: &str = "ZKML does not support API bindings, it is accessed via a command line interface.";
const ZEROG_CLI_ONLY: &str = "0g does not support API bindings, it is accessed via a command line interface.";
const ZKML_BENCH_FAILED: &str = "ZKML benchmarks could not be completed due to errors.";

/// The feature comparison schema.
#[must_use]
pub fn feature_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::new("Source Language", "sourceLanguage").with_description("The language used to write the framework."),
        PropertyDescriptor::new("Version", "version").with_description("The version of the framework used."),
        PropertyDescriptor::header("API Support").with_description(
            "Languages in which the framework supports an API. These are the languages that can be used to write programs that \
             interact with the framework.",
        ),
        PropertyDescriptor::new("Python", "apiSupport.python")
            .with_description("Whether this library supports the Python programming language.")
            .with_indent(4)
            .with_annotation("zkml", ZKML_CLI_ONLY)
            .with_annotation("0g", ZEROG_CLI_ONLY),
        PropertyDescriptor::new("Javascript", "apiSupport.javascript")
            .with_description("Whether this library supports the Javascript programming language.")
            .with_indent(4)
            .with_annotation("zkml", ZKML_CLI_ONLY)
            .with_annotation("0g", ZEROG_CLI_ONLY),
        PropertyDescriptor::new("Rust", "apiSupport.rust")
            .with_description("Whether this library supports the Rust programming language.")
            .with_indent(4)
            .with_annotation("zkml", ZKML_CLI_ONLY)
            .with_annotation("0g", ZEROG_CLI_ONLY),
        PropertyDescriptor::new("Others", "apiSupport.others").with_indent(4),
        PropertyDescriptor::new("ZK Proving System", "zkProvingSystem")
            .with_description("Zero Knowledge proof system used by the framework (if applicable)."),
        PropertyDescriptor::new("Unbounded Models", "unboundedModels")
            .with_description(
                "Unbounded models allow inputs / outputs of variable size and loops where the number of iterations is not known \
                 at compile time.",
            )
            .with_formatter(FormatterKind::Bool),
        PropertyDescriptor::new("Randomness Operations", "randomnessOperations")
            .with_description("Does the framework support randomness operations within models?")
            .with_formatter(FormatterKind::Bool),
        PropertyDescriptor::new("Audit", "audit")
            .with_description("Whether the framework has been audited by a third party.")
            .with_formatter(FormatterKind::Bool),
        PropertyDescriptor::new("Native Model Format", "nativeModelFormat")
            .with_description("The format that models need to be in to be used by the framework.")
            .with_info("riscZero", "risc0 supports Rust fully, and C++ with experimental support.")
            .with_info("zkml", "ZKML supports TFLite models in the msgpack format."),
        PropertyDescriptor::new("Supported Operators", "operatorSupport")
            .with_description(
                "Operators supported by the framework. This number is based on the operations supported by the source model \
                 format accepted by the framework.",
            )
            .with_formatter(FormatterKind::PercentOfTotal)
            .with_info("riscZero", "risc0 is a generalized zkML solution, and supports Rust with experimental support for C++."),
        PropertyDescriptor::header("GPU Acceleration")
            .with_description("Which GPU acceleration frameworks does the library support?"),
        PropertyDescriptor::new("CUDA", "gpu.cuda")
            .with_description(
                "CUDA is a parallel computing platform and programming model developed by Nvidia for general computing on its \
                 own GPUs.",
            )
            .with_indent(4)
            .with_formatter(FormatterKind::Bool)
            .with_annotation("riscZero", "risc0 offers CUDA support, but an open issue kept CUDA builds out of these benchmarks.")
            .with_info("ezkl", "EZKL offers CUDA support via Icicle's CUDA backend."),
        PropertyDescriptor::new("Metal", "gpu.metal")
            .with_description(
                "Metal is a low-level, low-overhead hardware-accelerated 3D graphic and compute shader application programming \
                 interface (API) developed by Apple.",
            )
            .with_indent(4)
            .with_formatter(FormatterKind::Bool),
    ]
}

/// The benchmark schema, generated from the models present in the fixture.
///
/// Paths are written machine-free; the render pass re-targets them onto the
/// selected machine. Generated rows are deduplicated by (name, path) since the
/// same model can appear under several machine branches.
#[must_use]
pub fn benchmark_properties(benchmarks: &BenchmarkData) -> Vec<PropertyDescriptor> {
    let mut descriptors = Vec::new();

    for model in benchmarks.models() {
        let title = upper_first(&model.replace('_', " "));
        descriptors.push(PropertyDescriptor::header(&title).with_description(format!("Benchmarks using the {title} model.")));
        descriptors.push(
            PropertyDescriptor::new("Proof Size", format!("{model}.$framework.proofSize"))
                .with_description("The size of the proof generated by the framework.")
                .with_indent(4)
                .with_formatter(FormatterKind::MeanSize)
                .with_annotation("zkml", ZKML_BENCH_FAILED)
                .with_info("orion", "Proof size couldn't be calculated for orion."),
        );
        descriptors.push(
            PropertyDescriptor::new("Proof Memory Usage", format!("{model}.$framework.memoryUsage"))
                .with_description("The memory usage of the proof generation process.")
                .with_indent(4)
                .with_formatter(FormatterKind::MeanSize)
                .with_annotation("zkml", ZKML_BENCH_FAILED),
        );
        descriptors.push(
            PropertyDescriptor::new("Proof Time", format!("{model}.$framework.provingTime"))
                .with_description("The time it takes to generate a proof for this circuit.")
                .with_indent(4)
                .with_formatter(FormatterKind::MeanTime)
                .with_annotation("zkml", ZKML_BENCH_FAILED),
        );
        descriptors.push(
            PropertyDescriptor::new("Proof Cost", format!("{model}.$framework.provingTime"))
                .with_description("Estimated cost of proof generation on the selected machine.")
                .with_indent(4)
                .with_formatter(FormatterKind::MeanCost)
                .with_annotation("zkml", ZKML_BENCH_FAILED),
        );
    }

    descriptors.push(
        PropertyDescriptor::new("Dot Product", format!("{DOT_PRODUCT_BRANCH}.$framework.results.0.$metric"))
            .with_description(
                "A dot product is calculated for a given input size. This is a good test to see how the framework circuitizes \
                 and proves a simple operation.",
            )
            .with_formatter(FormatterKind::Metric),
    );

    dedup_by_name_and_path(descriptors)
}

fn dedup_by_name_and_path(descriptors: Vec<PropertyDescriptor>) -> Vec<PropertyDescriptor> {
    let mut seen: Vec<(String, Option<String>)> = Vec::new();
    descriptors
        .into_iter()
        .filter(|descriptor| {
            let key = (descriptor.name.clone(), descriptor.path.clone());
            if seen.contains(&key) {
                return false;
            }
            seen.push(key);
            true
        })
        .collect()
}

fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().collect::<String>() + chars.as_str())
}
