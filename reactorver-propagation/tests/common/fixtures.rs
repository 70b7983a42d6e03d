//! Descriptor fixtures for reactorver-propagation

/// Root of a two-module build with released-style versions
pub fn root_pom() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.x</groupId>
  <artifactId>root</artifactId>
  <version>1.0-SNAPSHOT</version>
  <packaging>pom</packaging>
  <modules>
    <module>a</module>
    <module>b</module>
  </modules>
  <scm>
    <connection>scm:git:https://example.com/x.git</connection>
    <tag>HEAD</tag>
  </scm>
</project>"#
}

/// Module `a`, declaring its own version
pub fn module_a_pom() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>com.x</groupId>
    <artifactId>root</artifactId>
    <version>1.0-SNAPSHOT</version>
  </parent>
  <groupId>com.x</groupId>
  <artifactId>a</artifactId>
  <version>1.0-SNAPSHOT</version>
</project>"#
}

/// Module `b`, versioned through `${revision}` and depending on `a`
pub fn module_b_pom() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>com.x</groupId>
    <artifactId>root</artifactId>
    <version>1.0-SNAPSHOT</version>
  </parent>
  <groupId>com.x</groupId>
  <artifactId>b</artifactId>
  <version>${revision}</version>
  <dependencies>
    <dependency>
      <groupId>com.x</groupId>
      <artifactId>a</artifactId>
      <version>1.0-SNAPSHOT</version>
    </dependency>
    <dependency>
      <groupId>org.slf4j</groupId>
      <artifactId>slf4j-api</artifactId>
      <version>2.0.9</version>
    </dependency>
  </dependencies>
</project>"#
}

/// Root of a build where every module shares `${revision}`
pub fn revision_root_pom() -> &'static str {
    r#"<project>
  <groupId>com.x</groupId>
  <artifactId>root</artifactId>
  <version>${revision}</version>
  <packaging>pom</packaging>
  <modules>
    <module>a</module>
    <module>b/pom.xml</module>
  </modules>
</project>"#
}

/// Module inheriting both group id and version
pub fn revision_module_a_pom() -> &'static str {
    r#"<project>
  <parent>
    <groupId>com.x</groupId>
    <artifactId>root</artifactId>
    <version>${revision}</version>
  </parent>
  <artifactId>a</artifactId>
</project>"#
}

/// Module depending on a sibling through the shared placeholder
pub fn revision_module_b_pom() -> &'static str {
    r#"<project>
  <parent>
    <groupId>com.x</groupId>
    <artifactId>root</artifactId>
    <version>${revision}</version>
  </parent>
  <artifactId>b</artifactId>
  <version>${revision}</version>
  <dependencies>
    <dependency>
      <groupId>com.x</groupId>
      <artifactId>a</artifactId>
      <version>${revision}</version>
    </dependency>
  </dependencies>
</project>"#
}

/// Descriptor that already declares the attach execution
pub fn pom_with_attach_plugin() -> &'static str {
    r#"<project>
  <groupId>com.x</groupId>
  <artifactId>root</artifactId>
  <version>1.0</version>
  <build>
    <plugins>
      <plugin>
        <groupId>io.reactorver</groupId>
        <artifactId>reactorver-maven-plugin</artifactId>
        <version>0.3.0</version>
        <executions>
          <execution>
            <phase>prepare-package</phase>
            <goals>
              <goal>attach-modified-poms</goal>
            </goals>
          </execution>
        </executions>
        <dependencies>
          <dependency>
            <groupId>io.reactorver</groupId>
            <artifactId>reactorver-maven-plugin</artifactId>
            <version>0.3.0</version>
          </dependency>
        </dependencies>
      </plugin>
    </plugins>
  </build>
</project>"#
}

/// Descriptor that already declares the flatten plugin
pub fn pom_with_flatten_plugin() -> &'static str {
    r#"<project>
  <groupId>com.x</groupId>
  <artifactId>root</artifactId>
  <version>1.0</version>
  <build>
    <plugins>
      <plugin>
        <groupId>org.codehaus.mojo</groupId>
        <artifactId>flatten-maven-plugin</artifactId>
        <version>1.5.0</version>
      </plugin>
    </plugins>
  </build>
</project>"#
}

/// Descriptor of an unrelated build nested in the tree
pub fn foreign_pom() -> &'static str {
    r#"<project>
  <groupId>org.other</groupId>
  <artifactId>tool</artifactId>
  <version>5.0</version>
</project>"#
}

/// Module `a` stored as ISO-8859-1
pub fn latin1_module_a_pom() -> Vec<u8> {
    r#"<?xml version="1.0" encoding="ISO-8859-1"?>
<project>
  <parent>
    <groupId>com.x</groupId>
    <artifactId>root</artifactId>
    <version>1.0-SNAPSHOT</version>
  </parent>
  <artifactId>a</artifactId>
  <version>1.0</version>
  <name>Café</name>
</project>"#
        .chars()
        .map(|c| c as u8)
        .collect()
}
