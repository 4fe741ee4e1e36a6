//! 清单文档生成
//!
//! IMS 内容打包清单，形状固定，只有被引用的评估文件名是参数。

use super::xml::Element;

const IMSCP_XMLNS: &str = "http://www.imsglobal.org/xsd/imscp_v1p1";
const LOM_XMLNS: &str = "http://ltsc.ieee.org/xsd/imsmd_v1p2";
const IMSMD_XMLNS: &str = "http://www.imsglobal.org/xsd/imsmd_v1p2";
const XSI_XMLNS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const IMSCP_SCHEMA_LOCATION: &str = "http://www.imsglobal.org/xsd/imscp_v1p1 \
                                     http://www.imsglobal.org/xsd/imscp_v1p1.xsd \
                                     http://ltsc.ieee.org/xsd/imsmd_v1p2 \
                                     http://www.imsglobal.org/xsd/imsmd_v1p2p2.xsd";

/// 生成清单文档
///
/// # 参数
/// - `assessment_file_name`: 包内评估文档的文件名
pub fn generate_manifest(assessment_file_name: &str) -> String {
    Element::new("manifest")
        .attr("identifier", "manifest_1")
        .attr("xmlns", IMSCP_XMLNS)
        .attr("xmlns:lom", LOM_XMLNS)
        .attr("xmlns:imsmd", IMSMD_XMLNS)
        .attr("xmlns:xsi", XSI_XMLNS)
        .attr("xsi:schemaLocation", IMSCP_SCHEMA_LOCATION)
        .child(
            Element::new("metadata")
                .child(Element::new("schema").text("IMS Content"))
                .child(Element::new("schemaversion").text("1.1.3")),
        )
        .child(Element::new("organizations"))
        .child(
            Element::new("resources").child(
                Element::new("resource")
                    .attr("identifier", "resource_1")
                    .attr("type", "imsqti_xmlv1p2")
                    .child(Element::new("file").attr("href", assessment_file_name)),
            ),
        )
        .to_document()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_references_assessment_file() {
        let xml = generate_manifest("assessment.xml");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<manifest identifier=\"manifest_1\""));
        assert!(xml.contains("<schema>IMS Content</schema>"));
        assert!(xml.contains("<schemaversion>1.1.3</schemaversion>"));
        assert!(xml.contains("<organizations/>"));
        assert!(xml.contains("type=\"imsqti_xmlv1p2\""));
        assert!(xml.contains("<file href=\"assessment.xml\"/>"));
    }

    #[test]
    fn test_manifest_is_static_apart_from_file_name() {
        let first = generate_manifest("a.xml");
        let second = generate_manifest("b.xml");
        assert_eq!(
            first.replace("a.xml", "b.xml"),
            second
        );
    }
}
