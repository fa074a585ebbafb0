/*!
# Introductory Tutorial for BEEB

Begin by opening a terminal and running the executable. Type CTRL-D to
exit. Each line you type is evaluated at once and anything it produces
is printed underneath. For this tutorial, I'll mark lines that you type
with a "`>`".

<pre><code>&nbsp;> 1+2*3
&nbsp;  7
</code></pre>

Multiplication happened before addition. The evaluator follows the same
precedence rules BeebAsm does, which are close to those of BBC BASIC.
Brackets work as you would expect.

<pre><code>&nbsp;> (1+2)*3
&nbsp;  9
</code></pre>

Several expressions separated by commas print on one line. Several
statements separated by colons run one after another. A semicolon or a
backslash starts a comment.

<pre><code>&nbsp;> 10/4, 10 DIV 4, 10 MOD 4 : "done" ; a comment
&nbsp;  2.5 2 2
&nbsp;  done
</code></pre>

## Symbols

A statement of the form `name=expression` defines a symbol. Names are
case sensitive. A name ending in `$` may only hold a string.

<pre><code>&nbsp;> oswrch=&FFEE : osbyte=&FFF4
&nbsp;> oswrch-osbyte
&nbsp;  -6
&nbsp;> greeting$="HELLO" : greeting$+" WORLD"
&nbsp;  HELLO WORLD
</code></pre>

## The program counter

The star stands for the address the assembler is about to write to.
Move it with `*=expression`.

<pre><code>&nbsp;> *=&1900
&nbsp;> *, HI(*), LO(*)
&nbsp;  6400 25 0
</code></pre>

## Passes

An assembler reads its source twice. On the first pass a label may be
used before it is defined, so an undefined symbol is not an error yet.
Switch passes with `PASS 1` and `PASS 2`. A value which could not be
worked out on the first pass prints as `?`.

<pre><code>&nbsp;> PASS 1
&nbsp;> later+1
&nbsp;  ?
&nbsp;> later=5 : PASS 2
&nbsp;> later+1
&nbsp;  6
</code></pre>

On the first pass a symbol may only be defined once. The second pass
is allowed to define it again, as the assembler sees the same source.

## Errors

Errors report what went wrong and where.

<pre><code>&nbsp;> 1+(2*3
&nbsp;  MISMATCHED PARENTHESES AT COLUMN 7
</code></pre>

Stop a runaway line with CTRL-C.

*/
