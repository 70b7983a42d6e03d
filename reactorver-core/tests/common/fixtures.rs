//! Descriptor and configuration fixtures for reactorver-core

/// Aggregator descriptor with build plugins and an scm block
pub fn aggregator_pom() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.x</groupId>
  <artifactId>root</artifactId>
  <version>1.0-SNAPSHOT</version>
  <packaging>pom</packaging>
  <modules>
    <module>a</module>
    <module>b/pom.xml</module>
  </modules>
  <scm>
    <connection>scm:git:https://example.com/x.git</connection>
    <developerConnection>scm:git:ssh://git@example.com/x.git</developerConnection>
    <tag>HEAD</tag>
  </scm>
  <build>
    <plugins>
      <plugin>
        <groupId>org.codehaus.mojo</groupId>
        <artifactId>flatten-maven-plugin</artifactId>
        <version>1.5.0</version>
        <executions>
          <execution>
            <id>flatten</id>
            <phase>process-resources</phase>
            <goals>
              <goal>flatten</goal>
            </goals>
            <configuration>
              <flattenMode>ossrh</flattenMode>
            </configuration>
          </execution>
        </executions>
      </plugin>
    </plugins>
  </build>
</project>"#
}

/// Configuration file content with exclusions
pub fn exclusions_toml() -> &'static str {
    r#"exclusions = ["tools", "samples/legacy"]
skip_pom_update = true
git_commit_id_length = 12

[logging]
level = "debug"
format = "json"
"#
}

/// Module descriptor stored as ISO-8859-1, with a non-ASCII project name
pub fn latin1_module_pom() -> Vec<u8> {
    latin1(
        r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<project>
  <groupId>com.x</groupId>
  <artifactId>a</artifactId>
  <version>1.0</version>
  <name>Café</name>
  <properties>
    <owner>Søren</owner>
  </properties>
</project>"#,
    )
}

fn latin1(content: &str) -> Vec<u8> {
    content.chars().map(|c| c as u8).collect()
}
