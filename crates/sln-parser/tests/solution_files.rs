//! End-to-end tests over complete solution files.

use sln_core::{FormatVersion, LoadSequence, SectionPayload, VisualStudioProduct};
use sln_parser::parse_solution;

const EMPTY_SOLUTION: &str = include_str!("../../../tests/fixtures/empty.sln");
const EXAMPLE_SOLUTION: &str = include_str!("../../../tests/fixtures/example00.sln");

#[test]
fn empty_solution_parses_to_an_empty_document() {
    let document = parse_solution(EMPTY_SOLUTION).unwrap();

    assert_eq!(
        document.header.format_version,
        FormatVersion {
            major: 12,
            minor: 0
        }
    );
    assert_eq!(document.header.product(), VisualStudioProduct::Vs2012);
    assert!(document.projects.is_empty());
    assert!(document.global_sections.is_empty());
}

#[test]
fn example_solution_parses_projects_and_sections() {
    let document = parse_solution(EXAMPLE_SOLUTION).unwrap();

    assert_eq!(document.header.product(), VisualStudioProduct::Vs2013);
    assert_eq!(document.projects.len(), 3);
    assert_eq!(document.global_sections.len(), 4);

    let core = &document.projects[0];
    assert_eq!(core.name, "Acme.Core");
    assert_eq!(core.path, "Acme.Core\\Acme.Core.csproj");
    // the two C# projects share a project-type identifier
    assert_eq!(document.projects[0].type_id, document.projects[1].type_id);

    // sections come out in source order
    let names: Vec<&str> = document.global_sections.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        [
            "SolutionConfigurationPlatforms",
            "ProjectConfigurationPlatforms",
            "NestedProjects",
            "SolutionProperties",
        ]
    );
}

#[test]
fn example_solution_dispatches_payloads_by_section_name() {
    let document = parse_solution(EXAMPLE_SOLUTION).unwrap();

    let configurations = &document.global_sections["SolutionConfigurationPlatforms"];
    assert_eq!(configurations.load_sequence, LoadSequence::PreSolution);
    assert!(matches!(
        configurations.payload,
        SectionPayload::ConfigurationPlatforms(_)
    ));

    let project_configurations = &document.global_sections["ProjectConfigurationPlatforms"];
    assert_eq!(project_configurations.load_sequence, LoadSequence::PostSolution);
    match &project_configurations.payload {
        SectionPayload::ConfigurationPlatforms(text) => {
            assert!(text.contains(".Debug|Any CPU.Build.0 = Debug|Any CPU"));
        }
        other => panic!("expected opaque configuration payload, got {other:?}"),
    }

    match &document.global_sections["NestedProjects"].payload {
        SectionPayload::Raw(text) => {
            assert!(text.contains("{8E2B9F81-62A9-4FAE-A143-B32A5F9FB6C1}"));
        }
        other => panic!("expected raw capture for an unknown name, got {other:?}"),
    }

    match &document.global_sections["SolutionProperties"].payload {
        SectionPayload::Properties(map) => {
            assert_eq!(map.get("HideSolutionNode"), Some("FALSE"));
        }
        other => panic!("expected a property map, got {other:?}"),
    }
}

#[test]
fn crlf_line_endings_are_tolerated() {
    let crlf = EXAMPLE_SOLUTION.replace('\n', "\r\n");
    let document = parse_solution(&crlf).unwrap();

    assert_eq!(document.projects.len(), 3);
    assert_eq!(document.global_sections.len(), 4);
    assert_eq!(document.header.product_name, "Visual Studio 2013");
}

#[test]
fn byte_order_mark_is_tolerated() {
    let with_bom = format!("\u{feff}{EMPTY_SOLUTION}");
    let document = parse_solution(&with_bom).unwrap();

    assert_eq!(document.header.product(), VisualStudioProduct::Vs2012);
}

#[test]
fn reparsing_a_file_yields_an_equal_document() {
    assert_eq!(
        parse_solution(EXAMPLE_SOLUTION).unwrap(),
        parse_solution(EXAMPLE_SOLUTION).unwrap()
    );
}
